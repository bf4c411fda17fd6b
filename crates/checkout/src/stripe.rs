//! Stripe Checkout Implementation
//!
//! Calls the Stripe Checkout Sessions API
//! (https://api.stripe.com/v1/checkout/sessions) using reqwest HTTP client.
//! Stripe takes form-encoded bodies with bracketed keys for nested fields.

use reqwest::Client;
use serde::Deserialize;

use crate::{CheckoutError, CheckoutRequest, CheckoutService, CheckoutSession};

const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Stripe checkout session response body (subset)
#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: String,
    url: Option<String>,
}

/// Stripe API error response
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    error_type: String,
    message: Option<String>,
}

/// Stripe checkout service implementation
pub struct StripeCheckoutService {
    client: Client,
    secret_key: String,
    base_url: String,
}

impl StripeCheckoutService {
    /// Create a new Stripe checkout service
    pub fn new(secret_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            client: Client::new(),
            secret_key,
            base_url,
        }
    }
}

/// Encode a checkout request into Stripe's form fields
fn session_form(request: &CheckoutRequest) -> Vec<(&'static str, String)> {
    let mut form = vec![
        ("mode", "subscription".to_string()),
        ("payment_method_types[0]", "card".to_string()),
        ("line_items[0][price]", request.price_id.clone()),
        ("line_items[0][quantity]", request.quantity.to_string()),
        ("success_url", request.success_url.clone()),
        ("cancel_url", request.cancel_url.clone()),
    ];

    if let Some(email) = &request.customer_email {
        form.push(("customer_email", email.clone()));
    }

    form
}

#[async_trait::async_trait]
impl CheckoutService for StripeCheckoutService {
    async fn create_subscription_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        let url = format!("{}/v1/checkout/sessions", self.base_url);

        tracing::debug!(price_id = %request.price_id, "Sending Stripe checkout session request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&session_form(&request))
            .send()
            .await
            .map_err(|e| CheckoutError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&error_body) {
                return Err(CheckoutError::Response(format!(
                    "Stripe API error ({}): {}",
                    error_response.error.error_type,
                    error_response.error.message.unwrap_or_default()
                )));
            }

            return Err(CheckoutError::Response(format!(
                "Stripe API returned {}: {}",
                status, error_body
            )));
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| CheckoutError::Response(format!("Failed to parse response: {}", e)))?;

        let url = session.url.ok_or_else(|| {
            CheckoutError::Response(format!("Checkout session {} has no URL", session.id))
        })?;

        tracing::info!(session_id = %session.id, "Stripe checkout session created");

        Ok(CheckoutSession {
            id: session.id,
            url,
        })
    }
}
