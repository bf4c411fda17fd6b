//! Repository implementations for the Billing domain

pub mod memory;
pub mod transactions;

use smgpub_common::RepositoryError;
use uuid::Uuid;

use crate::domain::entities::Transaction;

pub use memory::MemoryTransactionStore;
pub use transactions::TransactionRepository;

/// Read access to recorded transactions
#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync {
    /// Transactions belonging to `user_id`, newest first
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Transaction>, RepositoryError>;
}
