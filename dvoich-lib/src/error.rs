use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt::{Debug, Display, Formatter};
use tracing::error;

/// The four response kinds the wire knows about. Every variant carries its
/// fixed client-facing message; internal causes stay in the logs.
pub enum ApiError {
    BadRequest(&'static str),
    Unauthorized(&'static str),
    NotFound(&'static str),
    Internal {
        message: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    /// Maps any failure onto the endpoint's designated 500.
    pub fn internal<E>(message: &'static str) -> impl FnOnce(E) -> ApiError
    where
        E: Into<anyhow::Error>,
    {
        move |e| ApiError::Internal {
            message,
            source: e.into(),
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(message)
            | ApiError::Unauthorized(message)
            | ApiError::NotFound(message) => message,
            ApiError::Internal { message, .. } => message,
        }
    }
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Internal { source, .. } => {
                f.write_fmt(format_args!("Internal({:#})", source))
            }
            _ => f.write_str(self.message()),
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if let ApiError::Internal { message, source } = self {
            error!(cause = %source, "{}", message);
        }
        HttpResponse::build(self.status_code()).json(json!({ "message": self.message() }))
    }
}

/// 400 with the fixed wire message for bodies that are not valid JSON
/// objects. Shared by the server binary and the integration tests.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        error!(req_path = req.path(), %err);
        let error_body = json!({ "message": "Некорректный запрос." });
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest()
                .content_type("application/json")
                .body(error_body.to_string()),
        )
        .into()
    })
}
