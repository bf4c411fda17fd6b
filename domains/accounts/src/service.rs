//! Credential service: registration and password authentication

use smgpub_common::PasswordHasher;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::error::AccountError;
use crate::repository::UserStore;

/// Register and authenticate users against a [`UserStore`].
///
/// Hashing is CPU-bound and runs on the blocking pool.
#[derive(Clone)]
pub struct CredentialService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    dummy_hash: Arc<str>,
}

impl CredentialService {
    pub fn new(store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        // Verified against when the email is unknown, so both paths pay one hash
        let dummy_hash = match hasher.hash("smgpub-dummy-password") {
            Ok(hash) => hash,
            Err(e) => {
                tracing::warn!(error = %e, "Could not prepare dummy password digest");
                String::new()
            }
        };

        Self {
            store,
            hasher,
            dummy_hash: dummy_hash.into(),
        }
    }

    /// Create a user with no membership and return its id.
    ///
    /// A second registration for the same email fails with
    /// [`AccountError::DuplicateEmail`], decided by the store's insert.
    pub async fn register(&self, email: &str, password: &str) -> Result<Uuid, AccountError> {
        let password_hash = self.hash(password).await?;
        let user = User::new(email.to_string(), password_hash);

        self.store.insert(&user).await.map_err(|e| {
            let err = AccountError::from(e);
            if matches!(err, AccountError::DuplicateEmail) {
                tracing::info!("Registration rejected: email already registered");
            }
            err
        })?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user.id)
    }

    /// Check a password and return the matching user's id
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Uuid, AccountError> {
        let Some(user) = self.store.find_by_email(email).await? else {
            self.verify(password, self.dummy_hash.to_string()).await?;
            tracing::info!("Login failed: unknown email");
            return Err(AccountError::NotFound);
        };

        if !self.verify(password, user.password_hash.clone()).await? {
            tracing::info!(user_id = %user.id, "Login failed: wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(user.id)
    }

    async fn hash(&self, password: &str) -> Result<String, AccountError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccountError::Hashing(e.to_string()))?
            .map_err(|e| AccountError::Hashing(e.to_string()))
    }

    async fn verify(&self, password: &str, digest: String) -> Result<bool, AccountError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| AccountError::Hashing(e.to_string()))
    }
}
