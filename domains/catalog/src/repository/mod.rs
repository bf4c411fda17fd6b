//! Repository implementations for the Catalog domain

pub mod beats;
pub mod memory;

use smgpub_common::RepositoryError;

use crate::domain::entities::Beat;

pub use beats::BeatRepository;
pub use memory::MemoryBeatStore;

/// Persistence seam for beat records
#[async_trait::async_trait]
pub trait BeatStore: Send + Sync {
    /// Every beat, newest first
    async fn list(&self) -> Result<Vec<Beat>, RepositoryError>;

    async fn insert(&self, beat: &Beat) -> Result<(), RepositoryError>;
}
