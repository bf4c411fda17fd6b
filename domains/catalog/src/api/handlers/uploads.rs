//! File upload API handler
//!
//! Implements:
//! - POST /api/upload: Store a single `file` part and return its stored name

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use smgpub_auth::AuthUser;

use super::MultipartForm;
use crate::api::middleware::CatalogState;
use crate::error::CatalogError;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file: String,
}

/// POST /api/upload: Store a single `file` part and return its stored name
pub async fn upload_file(
    State(state): State<CatalogState>,
    AuthUser(auth): AuthUser,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, CatalogError> {
    let form = MultipartForm::read(multipart).await?;
    let part = form
        .file
        .ok_or_else(|| CatalogError::Validation("A 'file' part is required".to_string()))?;

    let file = state.catalog.upload(&part.file_name, &part.bytes).await?;
    tracing::debug!(user_id = %auth.user_id, file = %file, "Upload accepted");

    Ok(Json(UploadResponse { file }))
}
