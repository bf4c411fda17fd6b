//! Authentication for the SMGPUB API
//!
//! Issues and verifies stateless session tokens and provides the `AuthUser`
//! axum extractor, which works with any domain state implementing
//! `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;

pub use backend::{AuthBackend, IssuedToken};
pub use claims::SessionClaims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;
