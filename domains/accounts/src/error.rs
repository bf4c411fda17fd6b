//! Account error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use smgpub_common::RepositoryError;

/// Message shared by every failed login, whatever the cause
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("An account with this email already exists")]
    DuplicateEmail,

    #[error("No account for this email")]
    NotFound,

    #[error("Password does not match")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Store error: {0}")]
    Store(RepositoryError),

    #[error("Token error: {0}")]
    Token(#[from] smgpub_auth::AuthError),
}

impl From<RepositoryError> for AccountError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists => AccountError::DuplicateEmail,
            other => AccountError::Store(other),
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AccountError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                "DUPLICATE_EMAIL",
                "An account with this email already exists".to_string(),
            ),
            // Unknown email and wrong password must be indistinguishable
            AccountError::NotFound | AccountError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                "INVALID_CREDENTIALS",
                INVALID_CREDENTIALS_MESSAGE.to_string(),
            ),
            AccountError::Validation(msg) => {
                return smgpub_common::Error::Validation(msg).into_response()
            }
            AccountError::Hashing(msg) => {
                return smgpub_common::Error::Internal(msg).into_response()
            }
            AccountError::Store(err) => return smgpub_common::Error::from(err).into_response(),
            AccountError::Token(err) => return err.into_response(),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
