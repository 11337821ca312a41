use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Reasons a create request is rejected. The Display text is the `message`
/// returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid request body")]
    InvalidBody,
    #[error("invalid expiration date")]
    InvalidExpiration,
    #[error("invalid day")]
    InvalidDay,
    #[error("invalid month")]
    InvalidMonth,
    #[error("invalid year")]
    InvalidYear,
    #[error("code value is used")]
    CodeValueUsed,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid id")]
    InvalidId,
    #[error("Invalid price")]
    InvalidPrice,
    #[error("product not found")]
    NotFound,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Lookup failures use an `error` field, create failures a `message` field.
        let (status, body) = match &self {
            AppError::InvalidId | AppError::InvalidPrice => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, json!({ "error": self.to_string() })),
            AppError::Validation(reason) => {
                (StatusCode::BAD_REQUEST, json!({ "message": reason.to_string() }))
            }
        };
        (status, Json(body)).into_response()
    }
}
