//! Domain entities for the Catalog domain

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::CatalogError;

/// A beat listed for sale.
///
/// `file` is the stored name of the audio file, servable under `/uploads/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Beat {
    pub id: Uuid,
    pub title: String,
    pub genre: Option<String>,
    pub bpm: Option<i32>,
    #[sqlx(rename = "musical_key")]
    pub key: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub file: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Beat {
    /// Create a beat from validated metadata, a stored file and its owner
    pub fn new(draft: BeatDraft, file: String, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            genre: draft.genre,
            bpm: draft.bpm,
            key: draft.key,
            price: draft.price,
            file,
            owner_id,
            created_at: Utc::now(),
        }
    }
}

/// Prices are stored as `NUMERIC(12, 2)`
const PRICE_SCALE: u32 = 2;
const PRICE_LIMIT: i64 = 10_000_000_000;

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("negative_price"));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::new("price_precision"));
    }
    if *price >= Decimal::new(PRICE_LIMIT, 0) {
        return Err(ValidationError::new("price_too_large"));
    }
    Ok(())
}

/// Beat metadata as submitted, before a file is attached
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct BeatDraft {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(custom(
        function = "validate_price",
        message = "Price must be between 0 and 9999999999.99 with at most 2 decimals"
    ))]
    pub price: Decimal,

    #[validate(length(max = 100))]
    pub genre: Option<String>,

    #[validate(range(min = 1, max = 999))]
    pub bpm: Option<i32>,

    #[validate(length(max = 20))]
    pub key: Option<String>,
}

impl BeatDraft {
    /// Build a draft from multipart text fields.
    ///
    /// Blank optional fields count as absent.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, CatalogError> {
        let text = |name: &str| {
            fields
                .get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let title = text("title")
            .ok_or_else(|| CatalogError::Validation("Field 'title' is required".to_string()))?;

        let price = text("price")
            .ok_or_else(|| CatalogError::Validation("Field 'price' is required".to_string()))?
            .parse::<Decimal>()
            .map_err(|_| CatalogError::Validation("Field 'price' must be a number".to_string()))?;

        let bpm = text("bpm")
            .map(|v| v.parse::<i32>())
            .transpose()
            .map_err(|_| CatalogError::Validation("Field 'bpm' must be an integer".to_string()))?;

        let draft = Self {
            title,
            price,
            genre: text("genre"),
            bpm,
            key: text("key"),
        };

        draft
            .validate()
            .map_err(|e| CatalogError::Validation(format!("Validation failed: {e}")))?;

        Ok(draft)
    }
}
