//! Route definitions for Catalog domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{beats, uploads};
use super::middleware::CatalogState;

/// Create all Catalog domain API routes
pub fn routes() -> Router<CatalogState> {
    Router::new()
        .route("/api/beats", get(beats::list_beats).post(beats::create_beat))
        .route("/api/upload", post(uploads::upload_file))
}
