//! Mock Checkout Service Implementation
//!
//! Records every session request and answers with a deterministic
//! provider URL, or with a configured failure.

use crate::{CheckoutError, CheckoutRequest, CheckoutService, CheckoutSession};
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

const MOCK_CHECKOUT_BASE: &str = "https://checkout.mock.smgpub.test/session";

/// Mock checkout service with request recording
#[derive(Debug, Clone, Default)]
pub struct MockCheckoutService {
    history: Arc<Mutex<Vec<CheckoutRequest>>>,
    fail: Arc<AtomicBool>,
    counter: Arc<AtomicU64>,
}

impl MockCheckoutService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent calls fail as if the provider rejected them
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Get recorded checkout requests
    pub fn recorded_requests(&self) -> Vec<CheckoutRequest> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl CheckoutService for MockCheckoutService {
    async fn create_subscription_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        tracing::info!(price_id = %request.price_id, "Mock checkout: received session request");

        if let Ok(mut history) = self.history.lock() {
            history.push(request);
        }

        if self.fail.load(Ordering::SeqCst) {
            return Err(CheckoutError::Response("Mock checkout failure".to_string()));
        }

        let id = format!("cs_mock_{}", self.counter.fetch_add(1, Ordering::SeqCst) + 1);
        Ok(CheckoutSession {
            url: format!("{MOCK_CHECKOUT_BASE}/{id}"),
            id,
        })
    }
}
