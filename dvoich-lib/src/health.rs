use actix_web::{get, web, HttpResponse, Responder};
use dvoich_repo::HealthCheck;
use std::sync::Arc;
use tracing::error;

const DB_ERROR: &str = "Ошибка подключения к базе данных";

/// Liveness probe; plain text by contract, on failure too.
#[get("/test")]
pub async fn test(health: web::Data<Arc<dyn HealthCheck>>) -> impl Responder {
    match health.check().await {
        Ok(now) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Сервер работает. Текущее время: {}", now)),
        Err(e) => {
            error!(cause = %e, "database liveness check failed");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(DB_ERROR)
        }
    }
}
