use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use squad_core::RosterError;
use database::MatchSizeError;
use serde_json::json;

/// Failure of a request, rendered as `{"error": ...}` with the matching status.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<MatchSizeError> for ApiError {
    fn from(err: MatchSizeError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
