//! Catalog error types

use axum::{
    extract::multipart::MultipartError,
    response::{IntoResponse, Response},
};
use smgpub_common::{Error, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(String),

    #[error("File storage failed: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] RepositoryError),

    #[error("Malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::Validation(msg) => Error::Validation(msg).into_response(),
            CatalogError::Storage(e) => Error::Internal(e.to_string()).into_response(),
            CatalogError::Store(e) => Error::from(e).into_response(),
            // Keeps 413 for oversized bodies
            CatalogError::Multipart(e) => e.into_response(),
        }
    }
}
