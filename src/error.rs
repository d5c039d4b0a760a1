//! HTTP-facing error type.
//!
//! Every failure a handler can surface maps to one [`AppError`] variant, which
//! renders itself via axum's [`IntoResponse`].
//!
//! | variant | status | body |
//! |---|---|---|
//! | `Validation` | 400 | `{"success": false, "message", "errors": {field: message}}` |
//! | `MalformedRequest` | 500 | `{"success": false, "message"}` |
//! | `NotFound` | 404 | `Not Found` (plain text) |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::FieldErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },

    #[error("{message}")]
    MalformedRequest { message: String },

    #[error("Not Found")]
    NotFound,
}

#[derive(Serialize)]
struct FailureBody<'a> {
    success: bool,
    message: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a FieldErrors>,
}

impl AppError {
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation {
            message: "Validation failed".to_string(),
            errors,
        }
    }

    pub fn malformed_request(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::MalformedRequest { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        Self::validation(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::NotFound => (status, "Not Found").into_response(),
            AppError::Validation { message, errors } => (
                status,
                Json(FailureBody {
                    success: false,
                    message,
                    errors: Some(errors),
                }),
            )
                .into_response(),
            AppError::MalformedRequest { message } => (
                status,
                Json(FailureBody {
                    success: false,
                    message,
                    errors: None,
                }),
            )
                .into_response(),
        }
    }
}
