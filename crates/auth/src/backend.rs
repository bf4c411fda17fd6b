//! Concrete authentication backend
//!
//! Stateless: issuing and verifying tokens needs only the shared secret, so
//! the guard never reads the credential store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{sign_jwt_token, validate_jwt_token};

/// A freshly signed session token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Issue a signed token binding `user_id`
    pub fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AuthError> {
        let (token, claims) = sign_jwt_token(&user_id.to_string(), &self.config)?;
        let expires_at =
            DateTime::<Utc>::from_timestamp(claims.exp, 0).ok_or(AuthError::TokenIssueFailed)?;

        tracing::debug!(user_id = %user_id, expires_at = %expires_at, "Session token issued");

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token and resolve the identity it carries
    pub fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = validate_jwt_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;
        let issued_at =
            DateTime::<Utc>::from_timestamp(claims.iat, 0).ok_or(AuthError::InvalidToken)?;
        let expires_at =
            DateTime::<Utc>::from_timestamp(claims.exp, 0).ok_or(AuthError::InvalidToken)?;

        Ok(AuthContext::new(user_id, issued_at, expires_at))
    }
}
