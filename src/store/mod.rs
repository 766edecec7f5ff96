//! Write-through stores over the key-value seam.
//!
//! Each store re-hydrates from the backend on every read and persists the
//! whole collection on every mutation; there is no caching layer. Reads of
//! malformed persisted data log a warning and fall back to the defaults
//! rather than surfacing an error.

pub mod categories;
pub mod records;
pub mod settings;

pub use categories::CategoryRegistry;
pub use records::RecordStore;
pub use settings::SettingsStore;

use serde::de::DeserializeOwned;

use crate::storage::KeyValueStore;

/// Reads and deserializes one key, falling back when the entry is absent or
/// malformed. This is the single code path implementing the resilience rule:
/// a corrupted entry never crashes the caller.
pub(crate) fn load_or_else<T, F>(kv: &impl KeyValueStore, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match kv.get(key) {
        None => fallback(),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "malformed persisted entry, using defaults");
                fallback()
            }
        },
    }
}
