//! JWT claims types

use serde::{Deserialize, Serialize};

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at
    pub iat: i64,
    /// Expires at
    pub exp: i64,
    /// Issuer, present when the backend is configured with one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}
