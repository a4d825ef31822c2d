//! Filesystem storage backend: one JSON file per key.

use std::path::{Path, PathBuf};

use super::{StorageBackend, StorageError};

/// A [`StorageBackend`] writing `<state_dir>/<key>.json` files.
///
/// The state directory is created on the first write. Keys map directly to
/// file names, so they must stay simple slugs (the store keys are
/// compile-time constants).
#[derive(Debug, Clone)]
pub struct FileStorage {
    state_dir: PathBuf,
}

impl FileStorage {
    /// Create a backend rooted at `state_dir`.
    #[must_use]
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.state_dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.state_dir.exists() {
            std::fs::create_dir_all(&self.state_dir)
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        std::fs::write(self.path_for(key), value).map_err(|e| StorageError::Io(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}

impl AsRef<Path> for FileStorage {
    fn as_ref(&self) -> &Path {
        &self.state_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_creates_state_dir_on_demand() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path().join("state"));

        // Reading before anything exists is None, not an error
        assert_eq!(storage.read("cart-items").unwrap(), None);

        storage.write("cart-items", "[{\"quantity\":1}]").unwrap();
        assert!(tmp.path().join("state").join("cart-items.json").exists());
        assert_eq!(
            storage.read("cart-items").unwrap().as_deref(),
            Some("[{\"quantity\":1}]")
        );

        storage.remove("cart-items").unwrap();
        assert_eq!(storage.read("cart-items").unwrap(), None);
        // Removing again is a no-op
        storage.remove("cart-items").unwrap();
    }

    #[test]
    fn test_keys_are_isolated_files() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path());

        storage.write("cart-items", "[1]").unwrap();
        storage.write("wishlist-items", "[2]").unwrap();

        assert_eq!(storage.read("cart-items").unwrap().as_deref(), Some("[1]"));
        assert_eq!(
            storage.read("wishlist-items").unwrap().as_deref(),
            Some("[2]")
        );
    }
}
