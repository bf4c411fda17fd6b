//! Repository implementations for the Accounts domain

pub mod memory;
pub mod users;

use smgpub_common::RepositoryError;
use uuid::Uuid;

use crate::domain::entities::User;

pub use memory::MemoryUserStore;
pub use users::UserRepository;

/// Persistence seam for user records.
///
/// Implementations must enforce email uniqueness themselves: `insert`
/// reports a second record with the same email as
/// `RepositoryError::AlreadyExists` instead of the caller racing a
/// lookup against the write.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: &User) -> Result<(), RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
}
