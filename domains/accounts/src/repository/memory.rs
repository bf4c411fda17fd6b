//! In-memory user store for tests and local development

use smgpub_common::RepositoryError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::UserStore;
use crate::domain::entities::User;

/// Users keyed by email; the map key is the uniqueness constraint.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, User>>, RepositoryError> {
        self.users
            .lock()
            .map_err(|_| RepositoryError::Unavailable("user store lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.lock()?;
        if users.contains_key(&user.email) {
            return Err(RepositoryError::AlreadyExists);
        }
        users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.lock()?.get(email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.lock()?.values().find(|u| u.id == id).cloned())
    }
}
