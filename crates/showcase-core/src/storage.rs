//! Key-Value Storage Abstraction
//!
//! Favorites and theme variables persist through this trait. The browser
//! implementation wraps `window.localStorage`; tests use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;

/// Durable string storage keyed by a fixed namespace
pub trait KeyValueStore {
    /// Read the raw value for `key`, `None` if absent
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value for `key`
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the write counter
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Number of `write` calls since creation
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}
