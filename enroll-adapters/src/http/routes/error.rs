use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use enroll_application::RegisterError;
use enroll_core::{UserError, UserStoreError};

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API-level error, mapped onto a status code and a `{"error"}` body.
///
/// Validation failures and business-rule rejections are client errors;
/// anything the storage layer could not complete is a server error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid payload: {0}")]
    InvalidInput(String),

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            ApiError::InvalidInput(_) | ApiError::UserAlreadyExists => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::UnexpectedError(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::DuplicateEmail => ApiError::UserAlreadyExists,
            UserStoreError::Unexpected(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::DuplicateEmail => ApiError::UserAlreadyExists,
            RegisterError::Store(e) => e.into(),
        }
    }
}
