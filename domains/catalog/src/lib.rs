//! Catalog domain: beats and the audio files they point at

pub mod api;
pub mod domain;
pub mod error;
pub mod repository;
pub mod service;
pub mod storage;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Beat, BeatDraft};
pub use error::CatalogError;

// Re-export repository types
pub use repository::{BeatRepository, BeatStore, MemoryBeatStore};
pub use service::CatalogService;
pub use storage::UploadStorage;

// Re-export API types
pub use api::routes;
pub use api::CatalogState;
