use crate::error::ApiError;
use actix_web::{post, web, HttpResponse, Responder};
use dvoich_repo::user_repo::UserRepo;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const MISSING_LOGIN: &str = "Логин обязателен.";
const USER_NOT_FOUND: &str = "Пользователь не найден.";
const LOOKUP_ERROR: &str = "Ошибка получения пользователя";

#[derive(Deserialize)]
pub struct UserLookup {
    login: Option<String>,
}

// No token required; the deployed clients call this lookup directly.
#[post("/get-user-id")]
pub async fn get_user_id(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    lookup: web::Json<UserLookup>,
) -> Result<impl Responder, ApiError> {
    let login = match lookup.into_inner().login {
        Some(login) if !login.is_empty() => login,
        _ => return Err(ApiError::BadRequest(MISSING_LOGIN)),
    };

    let user = user_repo
        .find_by_login(&login)
        .await
        .map_err(ApiError::internal(LOOKUP_ERROR))?
        .ok_or(ApiError::NotFound(USER_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(json!({ "user_id": user.id })))
}
