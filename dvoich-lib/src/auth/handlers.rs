use crate::auth::jwt::JWTAuth;
use crate::auth::password;
use crate::error::ApiError;
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use dvoich_repo::user_repo::UserRepo;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const MISSING_CREDENTIALS: &str = "Логин и пароль обязательны.";
const REGISTERED: &str = "Пользователь зарегистрирован";
const REGISTER_ERROR: &str = "Ошибка регистрации пользователя";
const INVALID_CREDENTIALS: &str = "Неверный логин или пароль.";
const LOGIN_OK: &str = "Успешный вход";
const LOGIN_ERROR: &str = "Ошибка авторизации";
const TOKEN_MISSING: &str = "Токен не предоставлен";
const TOKEN_INVALID: &str = "Неверный токен";
const ACCESS_GRANTED: &str = "Доступ разрешён";

#[derive(Deserialize)]
pub struct Credentials {
    login: Option<String>,
    password: Option<String>,
}

impl Credentials {
    // absent and empty fields are the same thing on this wire
    fn into_required(self) -> Result<(String, String), ApiError> {
        match (self.login, self.password) {
            (Some(user_login), Some(password)) if !user_login.is_empty() && !password.is_empty() => {
                Ok((user_login, password))
            }
            _ => Err(ApiError::BadRequest(MISSING_CREDENTIALS)),
        }
    }
}

#[post("/register")]
pub async fn register(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    credentials: web::Json<Credentials>,
) -> Result<impl Responder, ApiError> {
    let (user_login, password) = credentials.into_inner().into_required()?;

    let password_hash = web::block(move || password::encode_password(&password))
        .await
        .map_err(ApiError::internal(REGISTER_ERROR))?
        .map_err(ApiError::internal(REGISTER_ERROR))?;

    let user = user_repo
        .create_user(&user_login, &password_hash)
        .await
        .map_err(ApiError::internal(REGISTER_ERROR))?;

    Ok(HttpResponse::Created().json(json!({ "message": REGISTERED, "user": user })))
}

#[post("/login")]
pub async fn login(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    credentials: web::Json<Credentials>,
    req: HttpRequest,
) -> Result<impl Responder, ApiError> {
    let (user_login, password) = credentials.into_inner().into_required()?;

    let user = user_repo
        .find_by_login(&user_login)
        .await
        .map_err(ApiError::internal(LOGIN_ERROR))?;
    // one message for both failure modes, so logins cannot be probed
    let Some(user) = user else {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS));
    };

    let user_id = user.id;
    let password_hash = user.password_hash;
    let matched = web::block(move || password::verify_password(&password, &password_hash))
        .await
        .map_err(ApiError::internal(LOGIN_ERROR))?
        .map_err(ApiError::internal(LOGIN_ERROR))?;
    if !matched {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS));
    }

    let jwt_auth = req.app_data::<JWTAuth>().unwrap();
    let token = jwt_auth.create_token(user_id);
    Ok(HttpResponse::Ok().json(json!({ "message": LOGIN_OK, "token": token })))
}

/// Demonstration route. The `Authorization` header carries the raw token;
/// there is no `Bearer ` prefix to strip.
#[get("/protected")]
pub async fn protected(req: HttpRequest) -> Result<impl Responder, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(ApiError::Unauthorized(TOKEN_MISSING))?;
    let token = token
        .to_str()
        .map_err(|_| ApiError::Unauthorized(TOKEN_INVALID))?;

    let jwt_auth = req.app_data::<JWTAuth>().unwrap();
    match jwt_auth.validate_token(token) {
        Ok(user_id) => {
            Ok(HttpResponse::Ok().json(json!({ "message": ACCESS_GRANTED, "userId": user_id })))
        }
        Err(_) => Err(ApiError::Unauthorized(TOKEN_INVALID)),
    }
}
