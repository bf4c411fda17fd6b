//! Domain entities for the Billing domain

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed payment attributed to a user.
///
/// Nothing in this service writes transactions; they arrive from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(user_id: Uuid, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            created_at: Utc::now(),
        }
    }
}

/// Summed revenue over a set of transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueReport {
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    pub transactions: Vec<Transaction>,
}

impl RevenueReport {
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let revenue: Decimal = transactions.iter().map(|t| t.amount).sum();
        Self {
            revenue,
            transactions,
        }
    }
}
