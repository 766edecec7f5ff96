use chrono::{DateTime, Utc};

use crate::domain::record::{Record, RecordDraft};
use crate::errors::{AppendError, StoreError};
use crate::storage::{keys, KeyValueStore};

use super::load_or_else;

/// Persistence for the transaction record list.
///
/// Records are append-only in the current feature set: there is no edit or
/// per-record delete, so `updated_at` never diverges from `created_at`.
/// Insertion order is preserved and is the default display order.
pub struct RecordStore;

impl RecordStore {
    /// Returns the persisted records, or an empty list when the store is
    /// uninitialized or the entry is malformed.
    pub fn load(kv: &impl KeyValueStore) -> Vec<Record> {
        load_or_else(kv, keys::RECORDS, Vec::new)
    }

    /// Validates the draft, constructs the record, and persists the full
    /// list. A rejected draft leaves the store untouched.
    pub fn append(kv: &impl KeyValueStore, draft: &RecordDraft) -> Result<Record, AppendError> {
        let amount = draft.validate()?;
        let mut records = Self::load(kv);
        let now = Utc::now();
        let record = Record {
            id: next_id(&records, now),
            date: draft.date.clone(),
            description: draft.description.trim().to_string(),
            category: draft.category.clone(),
            amount,
            created_at: now,
            updated_at: now,
        };
        records.push(record.clone());
        Self::persist(kv, &records)?;
        tracing::debug!(id = %record.id, category = %record.category, "record appended");
        Ok(record)
    }

    /// Copies `seed` in verbatim iff the store currently holds zero records.
    /// Idempotent: a second call never duplicates data. Returns whether the
    /// seed was written.
    pub fn seed_if_empty(
        kv: &impl KeyValueStore,
        seed: &[Record],
    ) -> Result<bool, StoreError> {
        if !Self::load(kv).is_empty() {
            return Ok(false);
        }
        if seed.is_empty() {
            return Ok(false);
        }
        Self::persist(kv, seed)?;
        tracing::info!(count = seed.len(), "seeded empty record store");
        Ok(true)
    }

    fn persist(kv: &impl KeyValueStore, records: &[Record]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        kv.set(keys::RECORDS, &json)
    }
}

/// Timestamp-derived opaque id, bumped with a numeric suffix until it is
/// unique against the current store (several appends can land in the same
/// millisecond).
fn next_id(existing: &[Record], now: DateTime<Utc>) -> String {
    let base = format!("rec_{}", now.timestamp_millis());
    if !existing.iter().any(|record| record.id == base) {
        return base;
    }
    let mut bump = 1u32;
    loop {
        let candidate = format!("{}_{}", base, bump);
        if !existing.iter().any(|record| record.id == candidate) {
            return candidate;
        }
        bump += 1;
    }
}
