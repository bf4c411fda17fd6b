//! Accounts domain: credential store, registration, login

pub mod api;
pub mod domain;
pub mod error;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Membership, User};
pub use error::AccountError;

// Re-export repository types
pub use repository::{MemoryUserStore, UserRepository, UserStore};
pub use service::CredentialService;

// Re-export API types
pub use api::routes;
pub use api::AccountsState;
