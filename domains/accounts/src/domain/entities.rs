//! Domain entities for the Accounts domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Membership tier. Stored data only, no route is gated on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    Starter,
    Creator,
    Pro,
}

impl std::fmt::Display for Membership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Membership::Starter => write!(f, "starter"),
            Membership::Creator => write!(f, "creator"),
            Membership::Pro => write!(f, "pro"),
        }
    }
}

impl std::str::FromStr for Membership {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Membership::Starter),
            "creator" => Ok(Membership::Creator),
            "pro" => Ok(Membership::Pro),
            other => Err(format!("Unknown membership tier: {other}")),
        }
    }
}

/// Registered user.
///
/// `password_hash` is a PHC digest and never leaves the accounts domain.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub membership: Option<Membership>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with no membership
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            membership: None,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("membership", &self.membership)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
