//! Key-value persistence seam.
//!
//! Everything the application persists lives under four fixed string keys in
//! a synchronous string-to-string store. The trait keeps the stores testable
//! against an in-memory backend while the file backend carries the same data
//! across process restarts.

pub mod json_file;
pub mod memory;

pub use json_file::FileStore;
pub use memory::MemoryStore;

use crate::errors::StoreError;

/// The application's fixed storage keys, distinct from anything else that
/// may share the same backing store.
pub mod keys {
    pub const THEME: &str = "sft-theme";
    pub const CATEGORIES: &str = "sft-categories";
    pub const RECORDS: &str = "sft-records";
    pub const SETTINGS: &str = "sft-settings";

    /// Every key owned by the application; "delete all data" removes exactly
    /// these and nothing else.
    pub const ALL: [&str; 4] = [THEME, CATEGORIES, RECORDS, SETTINGS];
}

/// Synchronous string key-value store.
///
/// Mutating methods take `&self`: backends use interior mutability, matching
/// the single-actor model (one logical mutation at a time, no locking
/// discipline required).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
