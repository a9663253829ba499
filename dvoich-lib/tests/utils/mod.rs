use dvoich_lib::auth::jwt::JWTAuth;
use dvoich_repo::mem_repo;
use dvoich_repo::mem_repo::{MemCategoryRepo, MemHealthCheck, MemTransactionRepo, MemUserRepo};
use rstest::fixture;
use std::sync::Arc;

pub struct Repos {
    pub user_repo: Arc<MemUserRepo>,
    pub category_repo: Arc<MemCategoryRepo>,
    pub transaction_repo: Arc<MemTransactionRepo>,
    pub health: Arc<MemHealthCheck>,
}

#[fixture]
pub fn repos() -> Repos {
    let (user_repo, category_repo, transaction_repo, health) = mem_repo::create_repos();
    Repos {
        user_repo,
        category_repo,
        transaction_repo,
        health,
    }
}

#[fixture]
pub fn jwt_auth() -> JWTAuth {
    let secret: [u8; 32] = rand::random();
    JWTAuth::from_secret(&secret)
}

macro_rules! build_app {
    ($repos:expr, $jwt_auth:expr) => {{
        use dvoich_repo::category_repo::CategoryRepo;
        use dvoich_repo::transaction_repo::TransactionRepo;
        use dvoich_repo::user_repo::UserRepo;
        use dvoich_repo::HealthCheck;

        let app = actix_web::App::new()
            .app_data($jwt_auth.clone())
            .app_data(actix_web::web::Data::new(
                $repos.user_repo.clone() as std::sync::Arc<dyn UserRepo>
            ))
            .app_data(actix_web::web::Data::new(
                $repos.category_repo.clone() as std::sync::Arc<dyn CategoryRepo>
            ))
            .app_data(actix_web::web::Data::new(
                $repos.transaction_repo.clone() as std::sync::Arc<dyn TransactionRepo>
            ))
            .app_data(actix_web::web::Data::new(
                $repos.health.clone() as std::sync::Arc<dyn HealthCheck>
            ))
            .app_data(dvoich_lib::error::json_config())
            .configure(dvoich_lib::routes);
        actix_web::test::init_service(app).await
    }};
}

macro_rules! register_user {
    (&$service:ident, $login:expr, $password:expr) => {{
        let request = actix_web::test::TestRequest::post()
            .uri("/register")
            .set_json(serde_json::json!({ "login": $login, "password": $password }))
            .to_request();
        let response = actix_web::test::call_service(&$service, request).await;
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::CREATED,
            "Got {} response when registering {}",
            response.status(),
            $login
        );
        let body: serde_json::Value = actix_web::test::read_body_json(response).await;
        body
    }};
}

macro_rules! login_user {
    (&$service:ident, $login:expr, $password:expr) => {{
        let request = actix_web::test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({ "login": $login, "password": $password }))
            .to_request();
        let response = actix_web::test::call_service(&$service, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        let body: serde_json::Value = actix_web::test::read_body_json(response).await;
        body["token"].as_str().unwrap().to_owned()
    }};
}
