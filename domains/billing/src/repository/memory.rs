//! In-memory transaction store for tests and local development

use smgpub_common::RepositoryError;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::TransactionStore;
use crate::domain::entities::Transaction;

#[derive(Debug, Clone, Default)]
pub struct MemoryTransactionStore {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a transaction, standing in for the external payment feed
    pub fn record(&self, transaction: Transaction) {
        if let Ok(mut transactions) = self.transactions.lock() {
            transactions.push(transaction);
        }
    }
}

#[async_trait::async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Transaction>, RepositoryError> {
        let transactions = self.transactions.lock().map_err(|_| {
            RepositoryError::Unavailable("transaction store lock poisoned".to_string())
        })?;

        let mut owned: Vec<Transaction> = transactions
            .iter()
            .rev()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}
