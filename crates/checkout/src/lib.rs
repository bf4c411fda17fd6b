//! SMGPUB Checkout Gateway
//!
//! Creates provider-hosted subscription checkout sessions:
//! - Stripe Checkout integration for production
//! - Recording mock service for testing and development
//!
//! The only local logic is building the session request and forwarding the
//! provider's redirect URL. No local state, no idempotency keys.

pub mod mock;
pub mod stripe;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Checkout configuration error: {0}")]
    Configuration(String),

    #[error("Checkout request error: {0}")]
    Request(String),

    #[error("Checkout response error: {0}")]
    Response(String),
}

/// Request to open a subscription checkout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub price_id: String,
    pub quantity: u32,
    pub customer_email: Option<String>,
    pub success_url: String,
    pub cancel_url: String,
}

/// Provider-hosted checkout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// Subscription plan the backend sells, resolved once from configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPlan {
    pub price_id: String,
    pub client_url: String,
}

impl SubscriptionPlan {
    pub fn new(price_id: impl Into<String>, client_url: impl Into<String>) -> Self {
        Self {
            price_id: price_id.into(),
            client_url: client_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the checkout request for one seat of this plan
    pub fn checkout_request(&self, customer_email: Option<String>) -> CheckoutRequest {
        CheckoutRequest {
            price_id: self.price_id.clone(),
            quantity: 1,
            customer_email,
            success_url: format!("{}/dashboard?success=true", self.client_url),
            cancel_url: format!("{}/dashboard?canceled=true", self.client_url),
        }
    }
}

/// Checkout service configuration
#[derive(Clone)]
pub struct CheckoutConfig {
    pub provider: String,
    pub secret_key: Option<String>,
    pub api_base: Option<String>,
}

impl std::fmt::Debug for CheckoutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutConfig")
            .field("provider", &self.provider)
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

/// Checkout gateway trait for different payment providers
#[async_trait::async_trait]
pub trait CheckoutService: Send + Sync {
    /// Create a subscription checkout session and return its redirect target
    async fn create_subscription_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError>;
}

/// Factory for creating CheckoutService implementations
pub struct CheckoutServiceFactory;

impl CheckoutServiceFactory {
    pub fn create(config: CheckoutConfig) -> Result<Box<dyn CheckoutService>, CheckoutError> {
        match config.provider.as_str() {
            "stripe" => {
                tracing::info!("Creating Stripe checkout service");
                let secret_key = config.secret_key.ok_or_else(|| {
                    CheckoutError::Configuration("Stripe secret key is required".to_string())
                })?;
                Ok(Box::new(stripe::StripeCheckoutService::new(
                    secret_key,
                    config.api_base,
                )))
            }
            "mock" => {
                tracing::info!("Creating mock checkout service");
                Ok(Box::new(mock::MockCheckoutService::new()))
            }
            provider => Err(CheckoutError::Configuration(format!(
                "Unknown checkout provider: {}. Supported providers: stripe, mock",
                provider
            ))),
        }
    }
}
