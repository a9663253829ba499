#[macro_use]
extern crate tracing;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use rustls::{Certificate, PrivateKey, ServerConfig};
use rustls_pemfile::{certs, pkcs8_private_keys};
use tracing::Level;
use tracing_actix_web::TracingLogger;

use dvoich_lib::auth::jwt::JWTAuth;
use dvoich_lib::config::Config;

const LISTEN_ADDR: &str = "api.dvoich.ru:443";
const PRIVATE_KEY_FILE: &str = "/etc/letsencrypt/live/api.dvoich.ru/privkey.pem";
const CERTIFICATE_CHAIN_FILE: &str = "/etc/letsencrypt/live/api.dvoich.ru/fullchain.pem";

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    info!("tracing initialized");

    let config = Config::from_env()?;

    let (user_repo, category_repo, transaction_repo, health_check) =
        dvoich_repo::sqlx_repo::create_repos(&config.database_url(), 10)?;

    let jwt_auth = JWTAuth::from_secret(config.jwt_secret.as_bytes());

    let tls_config = load_rustls_config()?;

    info!("Listening on https://{}", LISTEN_ADDR);
    HttpServer::new(move || {
        App::new()
            .app_data(jwt_auth.clone())
            .app_data(Data::new(user_repo.clone()))
            .app_data(Data::new(category_repo.clone()))
            .app_data(Data::new(transaction_repo.clone()))
            .app_data(Data::new(health_check.clone()))
            .app_data(dvoich_lib::error::json_config())
            .wrap(TracingLogger::default())
            // CORS wraps last so every response carries the headers,
            // including the error paths
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .configure(dvoich_lib::routes)
    })
    .bind_rustls(LISTEN_ADDR, tls_config)?
    .run()
    .await?;

    Ok(())
}

fn load_rustls_config() -> Result<ServerConfig, anyhow::Error> {
    let config = ServerConfig::builder()
        .with_safe_defaults()
        .with_no_client_auth();

    let mut cert_file = BufReader::new(
        File::open(CERTIFICATE_CHAIN_FILE).context("Error opening certificate chain file")?,
    );
    let mut key_file =
        BufReader::new(File::open(PRIVATE_KEY_FILE).context("Error opening private key file")?);

    let cert_chain = certs(&mut cert_file)
        .context("Unable to read certificate chain file")?
        .into_iter()
        .map(Certificate)
        .collect();
    let mut keys: Vec<PrivateKey> = pkcs8_private_keys(&mut key_file)
        .context("Unable to read private key file")?
        .into_iter()
        .map(PrivateKey)
        .collect();

    if keys.is_empty() {
        error!("No private key found in file");
        std::process::exit(1);
    }

    Ok(config.with_single_cert(cert_chain, keys.remove(0))?)
}
