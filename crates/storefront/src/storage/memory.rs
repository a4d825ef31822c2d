//! In-memory storage backend for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{StorageBackend, StorageError};

/// A `HashMap`-backed [`StorageBackend`].
///
/// Nothing survives the process; this is the backend unit tests inject.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_remove_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("cart-items").unwrap(), None);

        storage.write("cart-items", "[]").unwrap();
        assert_eq!(storage.read("cart-items").unwrap().as_deref(), Some("[]"));

        storage.remove("cart-items").unwrap();
        assert_eq!(storage.read("cart-items").unwrap(), None);

        // Removing a missing key is a no-op
        storage.remove("cart-items").unwrap();
    }
}
