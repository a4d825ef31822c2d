//! Client-state stores: cart and wishlist.
//!
//! Both stores follow the same shape: an in-memory item collection, an
//! injected [`StorageBackend`](crate::storage::StorageBackend) that receives
//! a whole-collection snapshot after every mutation, and a broadcast channel
//! that notifies subscribers (header badges, drawers) once the snapshot is
//! safely written. The ordering is fixed: in-memory update, then storage
//! write, then broadcast - subscribers never observe derived values the
//! persisted snapshot does not back.
//!
//! Stores are constructed "not ready" and hydrate from storage explicitly;
//! consumers gate on [`CartStore::is_ready`](cart::CartStore::is_ready) /
//! [`WishlistStore::is_ready`](wishlist::WishlistStore::is_ready) before
//! trusting derived values.

pub mod cart;
pub mod wishlist;

pub use cart::{CartError, CartStore};
pub use wishlist::{WishlistError, WishlistStore};

use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;

use harlow_core::ProductId;

use crate::storage::{StorageBackend, StorageError};

/// Event broadcast channel capacity.
///
/// Store mutations are user-paced clicks; a small buffer is plenty, and a
/// lagging receiver drops old events instead of blocking mutations.
pub(crate) const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Change notification emitted by the stores.
///
/// Events carry the post-mutation derived values so subscribers can update
/// badges without re-reading the store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The cart collection changed in any way.
    CartChanged {
        /// Sum of quantities across all lines.
        total_items: u32,
        /// Sum of effective price x quantity across all lines.
        subtotal: Decimal,
    },
    /// A product was added to the cart; drives the add confirmation toast.
    CartItemAdded {
        /// Product that was added.
        product_id: ProductId,
        /// Snapshot name for the confirmation message.
        name: String,
    },
    /// The wishlist collection changed in any way.
    WishlistChanged {
        /// Number of saved products.
        total_items: usize,
    },
    /// A wishlist toggle resolved; drives the saved/removed toast.
    WishlistItemToggled {
        /// Product that was toggled.
        product_id: ProductId,
        /// Whether the product is now on the wishlist.
        added: bool,
    },
}

/// Read a store snapshot, treating anything unreadable as an empty store.
///
/// A missing key is a fresh browser profile; a corrupt snapshot is logged
/// and discarded. Neither is fatal.
pub(crate) fn load_snapshot<T: DeserializeOwned>(
    storage: &dyn StorageBackend,
    key: &str,
) -> Vec<T> {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::error!(key, error = %e, "Failed to read store snapshot");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(key, error = %e, "Discarding corrupt store snapshot");
            Vec::new()
        }
    }
}

/// Write a store's whole item collection as one JSON blob.
pub(crate) fn persist_snapshot<T: Serialize>(
    storage: &dyn StorageBackend,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(items).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.write(key, &raw)
}

/// Create a store event channel.
pub(crate) fn event_channel() -> broadcast::Sender<StoreEvent> {
    let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
    event_tx
}
