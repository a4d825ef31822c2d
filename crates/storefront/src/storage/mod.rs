//! Snapshot persistence for the stores.
//!
//! Each store persists its entire item collection as one JSON blob under a
//! fixed key on every mutation - whole-snapshot writes, never incremental
//! updates. The backend is injected, so stores are unit-testable against
//! [`MemoryStorage`] and run against [`FileStorage`] in production.
//!
//! There is no versioning or migration logic: a snapshot that no longer
//! parses hydrates as an empty store (logged, non-fatal).

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Storage key for the cart snapshot.
pub const CART_STORAGE_KEY: &str = "cart-items";

/// Storage key for the wishlist snapshot.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist-items";

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// A keyed blob store holding one JSON snapshot per key.
pub trait StorageBackend: Send + Sync {
    /// Read the snapshot stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read; a missing key is
    /// `Ok(None)`, not an error.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the snapshot stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the write does not complete.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the snapshot stored under `key`. Removing a missing key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
