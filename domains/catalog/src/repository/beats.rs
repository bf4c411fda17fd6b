//! PostgreSQL beat repository

use smgpub_common::RepositoryError;
use sqlx::PgPool;

use super::BeatStore;
use crate::domain::entities::Beat;

/// All columns in the beats table, used for SELECT and INSERT clauses.
const BEAT_COLUMNS: &str = "\
    id, title, genre, bpm, musical_key, \
    price, file, owner_id, created_at";

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS beats (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        genre TEXT,
        bpm INTEGER,
        musical_key TEXT,
        price NUMERIC(12, 2) NOT NULL,
        file TEXT NOT NULL,
        owner_id UUID NOT NULL REFERENCES users (id),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

#[derive(Clone)]
pub struct BeatRepository {
    pool: PgPool,
}

impl BeatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the beats table if missing; needs `users` to exist first
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl BeatStore for BeatRepository {
    async fn list(&self) -> Result<Vec<Beat>, RepositoryError> {
        let query = format!("SELECT {BEAT_COLUMNS} FROM beats ORDER BY created_at DESC");
        let beats = sqlx::query_as::<_, Beat>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(beats)
    }

    async fn insert(&self, beat: &Beat) -> Result<(), RepositoryError> {
        let query = format!(
            "INSERT INTO beats ({BEAT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"
        );
        sqlx::query(&query)
            .bind(beat.id)
            .bind(&beat.title)
            .bind(&beat.genre)
            .bind(beat.bpm)
            .bind(&beat.key)
            .bind(beat.price)
            .bind(&beat.file)
            .bind(beat.owner_id)
            .bind(beat.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
