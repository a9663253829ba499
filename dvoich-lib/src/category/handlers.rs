use crate::error::ApiError;
use actix_web::{get, post, web, HttpResponse, Responder};
use dvoich_repo::category_repo::CategoryRepo;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const MISSING_USER_ID: &str = "Не указан user_id.";
const CATEGORIES_ERROR: &str = "Ошибка получения категорий";

#[derive(Deserialize)]
pub struct UserIdParams {
    user_id: Option<i32>,
}

#[get("/categories")]
pub async fn get_categories(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    params: web::Query<UserIdParams>,
) -> Result<impl Responder, ApiError> {
    let user_id = params.user_id.ok_or(ApiError::BadRequest(MISSING_USER_ID))?;

    let categories = category_repo
        .get_categories(user_id)
        .await
        .map_err(ApiError::internal(CATEGORIES_ERROR))?;
    Ok(HttpResponse::Ok().json(categories))
}

/// Body-parameter variant of [get_categories]; wraps the rows in an object.
#[post("/get-categories")]
pub async fn get_categories_for_user(
    category_repo: web::Data<Arc<dyn CategoryRepo>>,
    params: web::Json<UserIdParams>,
) -> Result<impl Responder, ApiError> {
    let user_id = params.user_id.ok_or(ApiError::BadRequest(MISSING_USER_ID))?;

    let categories = category_repo
        .get_categories(user_id)
        .await
        .map_err(ApiError::internal(CATEGORIES_ERROR))?;
    Ok(HttpResponse::Ok().json(json!({ "categories": categories })))
}
