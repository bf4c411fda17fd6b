//! Subscription checkout handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use smgpub_auth::AuthUser;
use smgpub_common::{Error, Result, ValidatedJson};
use validator::Validate;

use crate::api::middleware::BillingState;

#[derive(Debug, Deserialize, Validate)]
pub struct SubscribeRequest {
    /// Prefills the provider's checkout form
    #[validate(email)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub url: String,
}

/// POST /api/stripe/subscribe: Open a subscription checkout session
pub async fn subscribe(
    State(state): State<BillingState>,
    AuthUser(auth): AuthUser,
    ValidatedJson(request): ValidatedJson<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>> {
    let checkout_request = state.plan.checkout_request(request.email);

    let session = state
        .checkout
        .create_subscription_session(checkout_request)
        .await
        .map_err(|e| {
            tracing::warn!(user_id = %auth.user_id, error = %e, "Checkout session failed");
            Error::Gateway(e.to_string())
        })?;

    tracing::info!(user_id = %auth.user_id, session_id = %session.id, "Checkout session created");
    Ok(Json(SubscribeResponse { url: session.url }))
}
