use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

/// Every error reply carries the same envelope as success replies, with
/// `status` set to "error".
#[derive(Serialize)]
struct ErrorEnvelope {
    status: &'static str,
    message: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        (
            code,
            Json(ErrorEnvelope {
                status: "error",
                message,
            }),
        )
            .into_response()
    }
}
