use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Why an item name was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidName {
    #[error("Item name cannot be empty.")]
    Empty,

    #[error("Item name is too long (max {max} chars).")]
    TooLong { max: usize },

    #[error("Invalid characters in item name.")]
    InvalidCharacters,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidName),

    #[error("Item already exists.")]
    DuplicateItem,

    #[error("Too many requests. Please slow down.")]
    RateLimited,

    #[error("{}", .0.body_text())]
    MalformedPayload(#[from] JsonRejection),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::DuplicateItem => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::MalformedPayload(rejection) => rejection.status(),
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
