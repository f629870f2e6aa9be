//! # V1 API Response Envelope & Error Contract
//!
//! Every v1 endpoint returns an [`ApiResponse<T>`] envelope:
//!
//! ```json
//! {
//!   "data": { ... },       // present on success, absent on error
//!   "error": { "code": "invalid_request", "message": "..." }  // present on error
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::FueroError;

/// Machine-readable error code included in every error response.
///
/// Serialized as a snake_case string on the wire. Each variant maps to a
/// fixed HTTP status code via [`ErrorCode::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request was malformed, had invalid parameters, or failed
    /// validation. HTTP 400.
    InvalidRequest,
    /// The requested resource does not exist. HTTP 404.
    NotFound,
    /// An unexpected server-side error occurred. Internal details are never
    /// leaked to the client. HTTP 500.
    InternalError,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured error payload within the API envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    /// Human-readable description safe to display to end users.
    pub message: String,
}

/// Canonical v1 API response envelope. On success `data` is present and
/// `error` absent; on error the reverse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    /// HTTP status to use in the response. Not serialized on the wire.
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success response with data (HTTP 200).
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            status: StatusCode::OK,
        }
    }

    /// Resource created response (HTTP 201).
    pub fn created(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            status: StatusCode::CREATED,
        }
    }

    /// Error response. HTTP status is derived from the [`ErrorCode`].
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        let status = code.status();
        Self {
            data: None,
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
            status,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        match serde_json::to_value(&self) {
            Ok(body) => (status, Json(body)).into_response(),
            Err(_) => {
                let body = serde_json::json!({
                    "error": {
                        "code": "internal_error",
                        "message": "An internal error occurred"
                    }
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl<T: Serialize> From<FueroError> for ApiResponse<T> {
    /// Internal error details are never leaked to the client; the real
    /// error is logged instead.
    fn from(err: FueroError) -> Self {
        match err {
            FueroError::NotFound(ref msg) => ApiResponse::error(ErrorCode::NotFound, msg.clone()),

            FueroError::OutOfRange { .. } => {
                ApiResponse::error(ErrorCode::NotFound, err.to_string())
            }

            FueroError::Validation(ref msg) => {
                ApiResponse::error(ErrorCode::InvalidRequest, msg.clone())
            }

            FueroError::Json(ref e) => {
                ApiResponse::error(ErrorCode::InvalidRequest, format!("Invalid JSON: {e}"))
            }

            FueroError::UrlParse(ref e) => {
                ApiResponse::error(ErrorCode::InvalidRequest, format!("Invalid URL: {e}"))
            }

            ref internal @ (FueroError::Database(_)
            | FueroError::Embedding(_)
            | FueroError::Portal(_)
            | FueroError::Http(_)
            | FueroError::Io(_)
            | FueroError::Internal(_)) => {
                tracing::error!(error = %internal, "Internal error mapped to v1 response");
                ApiResponse::error(ErrorCode::InternalError, "An internal error occurred")
            }
        }
    }
}
