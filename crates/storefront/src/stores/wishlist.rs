//! The wishlist store.
//!
//! Simpler than the cart: entries are keyed by product id alone, with no
//! quantity or size dimension, and additions have toggle semantics. The
//! persistence and broadcast pattern is the same.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::broadcast;

use harlow_core::{Product, ProductError, ProductId, WishlistItem};

use crate::storage::{StorageBackend, StorageError, WISHLIST_STORAGE_KEY};
use crate::stores::{StoreEvent, event_channel, load_snapshot, persist_snapshot};

/// Errors from wishlist operations.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// The product record failed validation; the wishlist was left
    /// unchanged.
    #[error("invalid product: {0}")]
    InvalidProduct(#[from] ProductError),

    /// The snapshot write failed; the in-memory mutation stands but no
    /// change event was broadcast.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The wishlist store.
///
/// Same injected-collaborator shape as
/// [`CartStore`](crate::stores::cart::CartStore).
pub struct WishlistStore {
    items: Vec<WishlistItem>,
    storage: Arc<dyn StorageBackend>,
    event_tx: broadcast::Sender<StoreEvent>,
    ready: bool,
}

impl std::fmt::Debug for WishlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistStore")
            .field("items", &self.items.len())
            .field("ready", &self.ready)
            .finish()
    }
}

impl WishlistStore {
    /// Create an empty, not-yet-hydrated store over the given backend.
    #[must_use]
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            items: Vec::new(),
            storage,
            event_tx: event_channel(),
            ready: false,
        }
    }

    /// Load the persisted snapshot and mark the store ready.
    ///
    /// A missing or corrupt snapshot hydrates as an empty wishlist (logged,
    /// never fatal).
    pub fn hydrate(&mut self) {
        self.items = load_snapshot(self.storage.as_ref(), WISHLIST_STORAGE_KEY);
        self.ready = true;
        tracing::info!(entries = self.items.len(), "Wishlist hydrated");
        self.broadcast_changed();
    }

    /// Whether [`hydrate`](Self::hydrate) has completed.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Subscribe to change events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_tx.subscribe()
    }

    /// The saved entries, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    /// Number of saved products.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a product is on the wishlist.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|item| item.product_id == *product_id)
    }

    /// Save a product.
    ///
    /// Returns `true` when the product was added, `false` when it was
    /// already saved (a quiet no-op - no write, no broadcast).
    ///
    /// # Errors
    ///
    /// [`WishlistError::InvalidProduct`] when the record fails validation,
    /// or [`WishlistError::Storage`] when the snapshot write fails.
    pub fn add_item(&mut self, product: &Product) -> Result<bool, WishlistError> {
        if let Err(e) = product.validate() {
            tracing::error!(product_id = %product.id, error = %e, "Rejected invalid product");
            return Err(e.into());
        }
        self.add_entry(WishlistItem::from_product(product))
    }

    /// Ingest an already-snapshotted entry (the move-from-cart path).
    ///
    /// Returns `true` when the entry was added, `false` when the product
    /// was already saved.
    ///
    /// # Errors
    ///
    /// [`WishlistError::Storage`] when the snapshot write fails.
    pub fn add_entry(&mut self, entry: WishlistItem) -> Result<bool, WishlistError> {
        if self.contains(&entry.product_id) {
            return Ok(false);
        }

        self.items.push(entry);
        self.persist()?;
        self.broadcast_changed();
        Ok(true)
    }

    /// Remove a saved product.
    ///
    /// Returns `true` when an entry was removed, `false` when the product
    /// was not saved (a quiet no-op).
    ///
    /// # Errors
    ///
    /// [`WishlistError::Storage`] when the snapshot write fails.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<bool, WishlistError> {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != *product_id);
        if self.items.len() == before {
            return Ok(false);
        }

        self.persist()?;
        self.broadcast_changed();
        Ok(true)
    }

    /// Toggle a product: add if absent, remove if present.
    ///
    /// Returns whether the product is on the wishlist afterwards. Two
    /// toggles in a row always return to the starting state.
    ///
    /// # Errors
    ///
    /// Same as [`add_item`](Self::add_item) /
    /// [`remove_item`](Self::remove_item).
    pub fn toggle_item(&mut self, product: &Product) -> Result<bool, WishlistError> {
        let added = if self.contains(&product.id) {
            self.remove_item(&product.id)?;
            false
        } else {
            self.add_item(product)?;
            true
        };

        let _ = self.event_tx.send(StoreEvent::WishlistItemToggled {
            product_id: product.id.clone(),
            added,
        });
        Ok(added)
    }

    /// Empty the wishlist unconditionally.
    ///
    /// # Errors
    ///
    /// [`WishlistError::Storage`] when the snapshot write fails.
    pub fn clear(&mut self) -> Result<(), WishlistError> {
        self.items.clear();
        self.persist()?;
        self.broadcast_changed();
        Ok(())
    }

    fn persist(&self) -> Result<(), StorageError> {
        persist_snapshot(self.storage.as_ref(), WISHLIST_STORAGE_KEY, &self.items)
    }

    fn broadcast_changed(&self) {
        // A send with no receivers is fine; nothing is mounted yet
        let _ = self.event_tx.send(StoreEvent::WishlistChanged {
            total_items: self.total_items(),
        });
    }
}
