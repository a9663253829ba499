pub mod auth;
pub mod category;
pub mod config;
pub mod error;
pub mod health;
pub mod transaction;
pub mod user;

use actix_web::web;

/// Registers the full endpoint surface. Shared by the server binary and the
/// integration tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::handlers::register)
        .service(auth::handlers::login)
        .service(auth::handlers::protected)
        .service(user::handlers::get_user_id)
        .service(category::handlers::get_categories)
        .service(category::handlers::get_categories_for_user)
        .service(transaction::handlers::get_transactions)
        .service(health::test);
}
