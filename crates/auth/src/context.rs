//! Authorization context for authenticated callers

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identity resolved from a verified bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthContext {
    pub fn new(user_id: Uuid, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            issued_at,
            expires_at,
        }
    }
}
