//! Catalog service: beat creation and file uploads

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Beat, BeatDraft};
use crate::error::CatalogError;
use crate::repository::BeatStore;
use crate::storage::UploadStorage;

#[derive(Clone)]
pub struct CatalogService {
    beats: Arc<dyn BeatStore>,
    storage: UploadStorage,
}

impl CatalogService {
    pub fn new(beats: Arc<dyn BeatStore>, storage: UploadStorage) -> Self {
        Self { beats, storage }
    }

    pub async fn list_beats(&self) -> Result<Vec<Beat>, CatalogError> {
        Ok(self.beats.list().await?)
    }

    /// Persist an uploaded file and return its stored name
    pub async fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<String, CatalogError> {
        Ok(self.storage.store(file_name, bytes).await?)
    }

    /// Create a beat owned by `owner_id` from the audio sent with it.
    ///
    /// The record is only written once its file is stored, and the file is
    /// removed again if the insert fails.
    pub async fn create_beat(
        &self,
        owner_id: Uuid,
        draft: BeatDraft,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<Beat, CatalogError> {
        let stored_name = self.storage.store(file_name, bytes).await?;
        let beat = Beat::new(draft, stored_name, owner_id);

        if let Err(e) = self.beats.insert(&beat).await {
            if let Err(remove_err) = self.storage.remove(&beat.file).await {
                tracing::warn!(
                    file = %beat.file,
                    error = %remove_err,
                    "Could not remove file after failed beat insert"
                );
            }
            return Err(e.into());
        }

        tracing::info!(beat_id = %beat.id, owner_id = %owner_id, file = %beat.file, "Beat created");
        Ok(beat)
    }
}
