//! Billing domain state and auth backend integration

use axum::extract::FromRef;
use smgpub_auth::AuthBackend;
use smgpub_checkout::{CheckoutService, SubscriptionPlan};
use std::sync::Arc;

use crate::repository::TransactionStore;

/// Application state for the Billing domain
#[derive(Clone)]
pub struct BillingState {
    pub transactions: Arc<dyn TransactionStore>,
    pub checkout: Arc<dyn CheckoutService>,
    pub plan: SubscriptionPlan,
    pub auth: AuthBackend,
}

impl FromRef<BillingState> for AuthBackend {
    fn from_ref(state: &BillingState) -> Self {
        state.auth.clone()
    }
}
