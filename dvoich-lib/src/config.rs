use anyhow::Context;
use std::env;

pub struct Config {
    pub pg_user: String,
    pub pg_host: String,
    pub pg_database: String,
    pub pg_password: String,
    pub pg_port: u16,
    pub jwt_secret: String,
}

impl Config {
    /// Every variable is required; boot fails on the first missing one.
    pub fn from_env() -> Result<Config, anyhow::Error> {
        let pg_user = read_env("PG_USER")?;
        let pg_host = read_env("PG_HOST")?;
        let pg_database = read_env("PG_DATABASE")?;
        let pg_password = read_env("PG_PASSWORD")?;
        let pg_port = read_env("PG_PORT")?
            .parse()
            .context("Unable to parse PG_PORT value")?;
        let jwt_secret = read_env("JWT_SECRET")?;

        Ok(Config {
            pg_user,
            pg_host,
            pg_database,
            pg_password,
            pg_port,
            jwt_secret,
        })
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.pg_user, self.pg_password, self.pg_host, self.pg_port, self.pg_database
        )
    }
}

fn read_env(key: &str) -> Result<String, anyhow::Error> {
    env::var(key).with_context(|| format!("Unable to read env var: {}", key))
}
