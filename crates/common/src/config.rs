//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Default token lifetime (24 hours)
pub const DEFAULT_JWT_TTL_SECONDS: i64 = 86_400;

/// Longest accepted token lifetime (10 years)
pub const MAX_JWT_TTL_SECONDS: i64 = 315_360_000;

/// Default upload size limit (50MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 52_428_800;

#[derive(Clone)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,
    pub database_max_connections: u32,

    /// Token signing
    pub jwt_secret: String,
    pub jwt_issuer: Option<String>,
    pub jwt_ttl_seconds: i64,

    /// Uploaded file storage
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,

    /// Payment provider
    pub checkout_provider: String,
    pub stripe_secret_key: Option<String>,
    pub stripe_price_id: String,
    pub stripe_api_base: Option<String>,
    pub client_url: String,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_max_connections", &self.database_max_connections)
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_ttl_seconds", &self.jwt_ttl_seconds)
            .field("upload_dir", &self.upload_dir)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("checkout_provider", &self.checkout_provider)
            .field("stripe_price_id", &self.stripe_price_id)
            .field("client_url", &self.client_url)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let checkout_provider =
            env::var("CHECKOUT_PROVIDER").unwrap_or_else(|_| "stripe".to_string());
        let stripe_secret_key = env::var("STRIPE_SECRET_KEY").ok();
        if checkout_provider == "stripe" && stripe_secret_key.is_none() {
            anyhow::bail!("STRIPE_SECRET_KEY is required when CHECKOUT_PROVIDER=stripe");
        }

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,
            database_max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 10)?,

            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,
            jwt_issuer: env::var("JWT_ISSUER").ok(),
            jwt_ttl_seconds: parse_or("JWT_TTL_SECONDS", DEFAULT_JWT_TTL_SECONDS)?,

            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,

            checkout_provider,
            stripe_secret_key,
            stripe_price_id: env::var("STRIPE_PRICE_ID")
                .map_err(|_| anyhow::anyhow!("STRIPE_PRICE_ID is required"))?,
            stripe_api_base: env::var("STRIPE_API_BASE").ok(),
            client_url: env::var("CLIENT_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            port: parse_or("PORT", 3000)?,
        };

        check_jwt_ttl(config.jwt_ttl_seconds)?;

        Ok(config)
    }
}

fn check_jwt_ttl(seconds: i64) -> Result<()> {
    if !(1..=MAX_JWT_TTL_SECONDS).contains(&seconds) {
        anyhow::bail!(
            "JWT_TTL_SECONDS must be between 1 and {MAX_JWT_TTL_SECONDS}, got {seconds}"
        );
    }
    Ok(())
}

/// Parse an optional numeric variable, falling back to `default` when unset.
fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("{key} is invalid: {e}")),
        Err(_) => Ok(default),
    }
}
