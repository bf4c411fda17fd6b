//! SMGPUB application composition root
//!
//! Composes all domain routers into a single application.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use smgpub_accounts::{AccountsState, CredentialService, UserRepository};
use smgpub_auth::{AuthBackend, AuthConfig};
use smgpub_billing::{BillingState, TransactionRepository, TransactionStore};
use smgpub_catalog::{BeatRepository, BeatStore, CatalogService, CatalogState, UploadStorage};
use smgpub_checkout::{CheckoutConfig, CheckoutService, CheckoutServiceFactory, SubscriptionPlan};
use smgpub_common::{Config, PasswordHasher};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Banner served at `/`
pub const SERVICE_BANNER: &str = concat!("SMGPUB API v", env!("CARGO_PKG_VERSION"));

/// Everything the routers need, already wired to concrete stores
#[derive(Clone)]
pub struct AppServices {
    pub auth: AuthBackend,
    pub credentials: CredentialService,
    pub beats: Arc<dyn BeatStore>,
    pub storage: UploadStorage,
    pub transactions: Arc<dyn TransactionStore>,
    pub checkout: Arc<dyn CheckoutService>,
    pub plan: SubscriptionPlan,
    pub max_upload_bytes: usize,
}

/// Build the auth backend described by the configuration
pub fn auth_backend(config: &Config) -> AuthBackend {
    let mut auth_config = AuthConfig::new(
        config.jwt_secret.clone(),
        chrono::Duration::seconds(config.jwt_ttl_seconds),
    );
    if let Some(issuer) = &config.jwt_issuer {
        auth_config = auth_config.with_issuer(issuer.clone());
    }
    AuthBackend::new(auth_config)
}

/// Compose the domain routers with the shared infrastructure routes
pub fn build_router(services: AppServices) -> Router {
    let accounts_state = AccountsState {
        credentials: services.credentials,
        auth: services.auth.clone(),
    };

    let catalog_state = CatalogState {
        catalog: CatalogService::new(services.beats, services.storage.clone()),
        auth: services.auth.clone(),
    };

    let billing_state = BillingState {
        transactions: services.transactions,
        checkout: services.checkout,
        plan: services.plan,
        auth: services.auth,
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { SERVICE_BANNER }))
        .merge(smgpub_accounts::routes().with_state(accounts_state))
        .merge(smgpub_catalog::routes().with_state(catalog_state))
        .merge(smgpub_billing::routes().with_state(billing_state))
        .nest_service("/uploads", ServeDir::new(services.storage.root()))
        .layer(DefaultBodyLimit::max(services.max_upload_bytes))
}

/// Create the main application router backed by PostgreSQL
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let users = UserRepository::new(pool.clone());
    let beats = BeatRepository::new(pool.clone());
    let transactions = TransactionRepository::new(pool);

    // beats references users
    users.ensure_schema().await?;
    beats.ensure_schema().await?;
    transactions.ensure_schema().await?;
    tracing::info!("Database schema ready");

    let checkout = CheckoutServiceFactory::create(CheckoutConfig {
        provider: config.checkout_provider.clone(),
        secret_key: config.stripe_secret_key.clone(),
        api_base: config.stripe_api_base.clone(),
    })?;

    let services = AppServices {
        auth: auth_backend(&config),
        credentials: CredentialService::new(Arc::new(users), PasswordHasher::default()),
        beats: Arc::new(beats),
        storage: UploadStorage::new(config.upload_dir.clone()),
        transactions: Arc::new(transactions),
        checkout: Arc::from(checkout),
        plan: SubscriptionPlan::new(config.stripe_price_id.clone(), config.client_url.clone()),
        max_upload_bytes: config.max_upload_bytes,
    };

    Ok(build_router(services))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
