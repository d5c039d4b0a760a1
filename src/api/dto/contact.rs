//! DTOs for the contact relay endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::FieldErrors;

/// Response of `POST /api/contact`.
///
/// The same shape is used for the success acknowledgement and for failures;
/// validation failures additionally carry an `errors` map (see
/// [`crate::error::AppError`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,

    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
}

impl ContactResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: FieldErrors::new(),
        }
    }
}
