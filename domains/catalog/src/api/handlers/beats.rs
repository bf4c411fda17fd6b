//! Beat API handlers
//!
//! Implements:
//! - GET /api/beats: List every beat, newest first
//! - POST /api/beats: Create a beat owned by the caller (multipart)

use axum::{
    extract::{Multipart, State},
    Json,
};
use smgpub_auth::AuthUser;

use super::MultipartForm;
use crate::api::middleware::CatalogState;
use crate::domain::entities::{Beat, BeatDraft};
use crate::error::CatalogError;

/// GET /api/beats: List every beat, newest first
pub async fn list_beats(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<Beat>>, CatalogError> {
    Ok(Json(state.catalog.list_beats().await?))
}

/// POST /api/beats: Create a beat owned by the caller
///
/// Text fields: `title`, `price`, `genre`, `bpm`, `key`, plus the audio as
/// a `file` part. The file is always stored by this request.
pub async fn create_beat(
    State(state): State<CatalogState>,
    AuthUser(auth): AuthUser,
    multipart: Multipart,
) -> Result<Json<Beat>, CatalogError> {
    let form = MultipartForm::read(multipart).await?;

    // Metadata is checked before anything touches the disk
    let draft = BeatDraft::from_fields(&form.fields)?;

    let part = form
        .file
        .ok_or_else(|| CatalogError::Validation("An audio file is required".to_string()))?;

    let beat = state
        .catalog
        .create_beat(auth.user_id, draft, &part.file_name, &part.bytes)
        .await?;
    Ok(Json(beat))
}
