use crate::errors::StoreError;
use crate::storage::{keys, KeyValueStore};

use super::load_or_else;

/// Category names seeded into the registry the first time it is read.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food",
    "Books",
    "Transport",
    "Entertainment",
    "Fees",
    "Other",
];

/// Ordered set of category names.
///
/// Names are unique with case-sensitive comparison. Records hold categories
/// by name only, so deleting a category never touches records; any that
/// referenced the deleted name keep it as a dangling reference.
pub struct CategoryRegistry;

impl CategoryRegistry {
    /// Returns the persisted list, or the six default categories when the
    /// registry was never initialized. The default is not persisted on read.
    pub fn load(kv: &impl KeyValueStore) -> Vec<String> {
        load_or_else(kv, keys::CATEGORIES, default_list)
    }

    /// Appends a trimmed name and persists. Empty and duplicate names are a
    /// silent no-op with no persistence write; returns whether anything
    /// changed.
    pub fn add(kv: &impl KeyValueStore, name: &str) -> Result<bool, StoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        let mut categories = Self::load(kv);
        if categories.iter().any(|existing| existing == trimmed) {
            tracing::debug!(category = trimmed, "duplicate category ignored");
            return Ok(false);
        }
        categories.push(trimmed.to_string());
        Self::persist(kv, &categories)?;
        Ok(true)
    }

    /// Removes the element at `index` in the list snapshot taken at call
    /// time. Out-of-range indices are a no-op.
    pub fn remove_at(kv: &impl KeyValueStore, index: usize) -> Result<bool, StoreError> {
        let mut categories = Self::load(kv);
        if index >= categories.len() {
            return Ok(false);
        }
        let removed = categories.remove(index);
        tracing::debug!(category = %removed, "category removed");
        Self::persist(kv, &categories)?;
        Ok(true)
    }

    /// Removes a category by its name. Since names are unique this is the
    /// stable-identifier delete, immune to the stale-index problem of
    /// positional removal.
    pub fn remove(kv: &impl KeyValueStore, name: &str) -> Result<bool, StoreError> {
        let mut categories = Self::load(kv);
        let before = categories.len();
        categories.retain(|existing| existing != name);
        if categories.len() == before {
            return Ok(false);
        }
        Self::persist(kv, &categories)?;
        Ok(true)
    }

    fn persist(kv: &impl KeyValueStore, categories: &[String]) -> Result<(), StoreError> {
        let json = serde_json::to_string(categories)?;
        kv.set(keys::CATEGORIES, &json)
    }
}

fn default_list() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
}
