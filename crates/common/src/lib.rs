//! Shared utilities, configuration, and error handling for SMGPUB
//!
//! This crate provides common functionality used across the SMGPUB backend:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Password hashing
//! - Request validation extractors

pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use crypto::PasswordHasher;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
