//! PostgreSQL transaction repository

use smgpub_common::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

use super::TransactionStore;
use crate::domain::entities::Transaction;

const TRANSACTION_COLUMNS: &str = "id, user_id, amount, created_at";

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        amount NUMERIC(12, 2) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS transactions_user_id_idx ON transactions (user_id)",
];

#[derive(Clone)]
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TransactionStore for TransactionRepository {
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Transaction>, RepositoryError> {
        let query = format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions \
             WHERE user_id = $1 ORDER BY created_at DESC"
        );
        let transactions = sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(transactions)
    }
}
