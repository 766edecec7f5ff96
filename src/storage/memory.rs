use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::errors::StoreError;
use crate::storage::KeyValueStore;

/// In-memory backend for tests and embedders that manage durability
/// themselves. Tracks how many writes were issued so tests can assert that
/// no-op operations really skip persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set`/`remove` calls issued so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.cells.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes.set(self.writes.get() + 1);
        self.cells.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.writes.set(self.writes.get() + 1);
        self.cells.borrow_mut().remove(key);
        Ok(())
    }
}
