//! Route definitions for Billing domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analytics, subscriptions};
use super::middleware::BillingState;

/// Create all Billing domain API routes
pub fn routes() -> Router<BillingState> {
    Router::new()
        .route("/api/stripe/subscribe", post(subscriptions::subscribe))
        .route("/api/analytics/revenue", get(analytics::revenue))
}
