use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FueroError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Portal error: {0}")]
    Portal(String),

    #[error("Catalog position {position} out of range (size {len})")]
    OutOfRange { position: usize, len: usize },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for FueroError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            FueroError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            FueroError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            FueroError::OutOfRange { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            FueroError::Database(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            FueroError::Embedding(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            FueroError::Portal(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            FueroError::Http(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            FueroError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            FueroError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            FueroError::UrlParse(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            FueroError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, FueroError>;
