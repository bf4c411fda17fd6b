//! In-memory beat store for tests and local development

use smgpub_common::RepositoryError;
use std::sync::{Arc, Mutex};

use super::BeatStore;
use crate::domain::entities::Beat;

#[derive(Debug, Clone, Default)]
pub struct MemoryBeatStore {
    beats: Arc<Mutex<Vec<Beat>>>,
    unavailable: Arc<std::sync::atomic::AtomicBool>,
}

impl MemoryBeatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail as if the connection were lost
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable
            .store(unavailable, std::sync::atomic::Ordering::SeqCst);
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Beat>>, RepositoryError> {
        if self.unavailable.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("beat store offline".to_string()));
        }
        self.beats
            .lock()
            .map_err(|_| RepositoryError::Unavailable("beat store lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl BeatStore for MemoryBeatStore {
    async fn list(&self) -> Result<Vec<Beat>, RepositoryError> {
        // Later inserts first, then a stable sort keeps them ahead on equal timestamps
        let mut beats: Vec<Beat> = self.lock()?.iter().rev().cloned().collect();
        beats.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(beats)
    }

    async fn insert(&self, beat: &Beat) -> Result<(), RepositoryError> {
        let mut beats = self.lock()?;
        if beats.iter().any(|b| b.id == beat.id) {
            return Err(RepositoryError::AlreadyExists);
        }
        beats.push(beat.clone());
        Ok(())
    }
}
