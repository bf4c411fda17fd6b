//! Catalog domain state and auth backend integration

use axum::extract::FromRef;
use smgpub_auth::AuthBackend;

use crate::service::CatalogService;

/// Application state for the Catalog domain
#[derive(Clone)]
pub struct CatalogState {
    pub catalog: CatalogService,
    pub auth: AuthBackend,
}

impl FromRef<CatalogState> for AuthBackend {
    fn from_ref(state: &CatalogState) -> Self {
        state.auth.clone()
    }
}
