//! Domain types for transaction records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DraftError;

/// A single dated, categorized, amount-bearing transaction entry.
///
/// Field names serialize in camelCase to match the historical wire format of
/// the persisted record array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Opaque unique identifier, generated once at creation.
    pub id: String,
    /// User-supplied ISO 8601 calendar date, stored verbatim (not
    /// range-checked).
    pub date: String,
    pub description: String,
    /// Weak reference into the category registry. May dangle after a
    /// category delete; dangling values still aggregate under their own
    /// bucket.
    pub category: String,
    /// Signed amount. The currency is a global display setting, never stored
    /// per record.
    pub amount: f64,
    /// Immutable creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Bumped on every mutation. No edit path exists today, so it stays
    /// equal to `created_at`; a future edit must preserve `id` and
    /// `created_at` and touch only this field.
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            date: date.into(),
            description: description.into(),
            category: category.into(),
            amount,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Raw user input for a new record, exactly as the entry form supplies it.
/// The amount arrives as text and is parsed during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
}

impl RecordDraft {
    /// Checks every field and parses the amount. Rejection happens before
    /// any persistence; a valid draft yields the parsed amount.
    pub fn validate(&self) -> Result<f64, DraftError> {
        if self.date.trim().is_empty() {
            return Err(DraftError::MissingDate);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::MissingDescription);
        }
        if self.category.trim().is_empty() {
            return Err(DraftError::MissingCategory);
        }
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidAmount(self.amount.clone()))?;
        if !amount.is_finite() {
            return Err(DraftError::InvalidAmount(self.amount.clone()));
        }
        Ok(amount)
    }
}
