//! Billing domain: subscription checkout and revenue analytics

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{RevenueReport, Transaction};

// Re-export repository types
pub use repository::{MemoryTransactionStore, TransactionRepository, TransactionStore};

// Re-export API types
pub use api::routes;
pub use api::BillingState;
