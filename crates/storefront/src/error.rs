//! Unified error handling.
//!
//! Provides a unified `StorefrontError` that the embedding application can
//! match on at its boundary. Subsystems keep their own error enums; this
//! type exists so callers that thread several subsystems together (e.g. a
//! product page that touches the catalog, the stores, and the reviews
//! client) can use one `Result` type.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::reviews::ReviewError;
use crate::storage::StorageError;
use crate::stores::{CartError, WishlistError};

/// Application-level error type for the storefront engine.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog failed to load.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A storage backend operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// A wishlist operation failed.
    #[error("Wishlist error: {0}")]
    Wishlist(#[from] WishlistError),

    /// A reviews API call failed.
    #[error("Review error: {0}")]
    Review(#[from] ReviewError),

    /// Configuration failed to load.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
