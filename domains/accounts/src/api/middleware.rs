//! Accounts domain state and auth backend integration

use axum::extract::FromRef;
use smgpub_auth::AuthBackend;

use crate::service::CredentialService;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub credentials: CredentialService,
    pub auth: AuthBackend,
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
