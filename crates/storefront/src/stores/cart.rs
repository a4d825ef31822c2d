//! The cart store.
//!
//! Line items are keyed by (product id, selected size): adding an existing
//! pair increments its quantity instead of duplicating the line. Every
//! mutation persists the whole collection and broadcasts a [`StoreEvent`]
//! carrying the post-mutation totals.

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;
use tokio::sync::broadcast;

use harlow_core::{CartItem, Product, ProductError, ProductId, WishlistItem};

use crate::storage::{CART_STORAGE_KEY, StorageBackend, StorageError};
use crate::stores::wishlist::{WishlistError, WishlistStore};
use crate::stores::{StoreEvent, event_channel, load_snapshot, persist_snapshot};

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product record failed validation; the cart was left unchanged.
    #[error("invalid product: {0}")]
    InvalidProduct(#[from] ProductError),

    /// No cart line matches the requested (product id, size) pair.
    #[error("no cart line for product {0}")]
    LineNotFound(ProductId),

    /// The snapshot write failed; the in-memory mutation stands but no
    /// change event was broadcast.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The wishlist half of a move-to-wishlist failed; the cart was left
    /// unchanged.
    #[error(transparent)]
    Wishlist(#[from] WishlistError),
}

/// Sum of quantities across all lines.
#[must_use]
pub fn total_items(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

/// Sum of effective price x quantity across all lines.
#[must_use]
pub fn subtotal(items: &[CartItem]) -> Decimal {
    items.iter().map(CartItem::line_total).sum()
}

/// The cart store.
///
/// Owns the line-item collection; persistence and change broadcasting are
/// injected collaborators, so the store runs the same against a file-backed
/// state directory or an in-memory test backend.
pub struct CartStore {
    items: Vec<CartItem>,
    storage: Arc<dyn StorageBackend>,
    event_tx: broadcast::Sender<StoreEvent>,
    ready: bool,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items.len())
            .field("ready", &self.ready)
            .finish()
    }
}

impl CartStore {
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
    /// A missing or corrupt snapshot hydrates as an empty cart (logged,
    /// never fatal). Subscribers get a [`StoreEvent::CartChanged`] so badges
    /// mounted before hydration catch up.
    pub fn hydrate(&mut self) {
        self.items = load_snapshot(self.storage.as_ref(), CART_STORAGE_KEY);
        self.ready = true;
        tracing::info!(lines = self.items.len(), "Cart hydrated");
        self.broadcast_changed();
    }

    /// Whether [`hydrate`](Self::hydrate) has completed.
    ///
    /// Derived values read before this returns `true` reflect an empty
    /// cart, not the persisted one.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Subscribe to change events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_tx.subscribe()
    }

    /// The current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        total_items(&self.items)
    }

    /// Sum of effective price x quantity across all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        subtotal(&self.items)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a product to the cart.
    ///
    /// A quantity of zero is clamped to one. If a line with the same
    /// (product id, size) pair exists, its quantity is incremented by the
    /// requested amount; otherwise a new snapshot line is appended.
    ///
    /// # Errors
    ///
    /// [`CartError::InvalidProduct`] when the record fails validation (the
    /// cart is left unchanged), or [`CartError::Storage`] when the snapshot
    /// write fails.
    pub fn add_item(
        &mut self,
        product: &Product,
        size: Option<&str>,
        quantity: u32,
    ) -> Result<(), CartError> {
        if let Err(e) = product.validate() {
            tracing::error!(product_id = %product.id, error = %e, "Rejected invalid product");
            return Err(e.into());
        }
        let quantity = quantity.max(1);

        match self
            .items
            .iter_mut()
            .find(|item| item.matches(&product.id, size))
        {
            Some(line) => line.quantity += quantity,
            None => self
                .items
                .push(CartItem::from_product(product, size, quantity)),
        }

        self.persist()?;
        // The confirmation toast event, then the derived-value update
        let _ = self.event_tx.send(StoreEvent::CartItemAdded {
            product_id: product.id.clone(),
            name: product.name.clone(),
        });
        self.broadcast_changed();
        Ok(())
    }

    /// Remove lines for a product.
    ///
    /// With `size: None` every line for the product id is removed (all
    /// sizes); with `Some` only the matching pair. Removing nothing is a
    /// no-op, not an error - no write, no broadcast.
    ///
    /// # Errors
    ///
    /// [`CartError::Storage`] when the snapshot write fails.
    pub fn remove_item(
        &mut self,
        product_id: &ProductId,
        size: Option<&str>,
    ) -> Result<(), CartError> {
        let before = self.items.len();
        self.items.retain(|item| match size {
            Some(s) => !item.matches(product_id, Some(s)),
            None => item.product_id != *product_id,
        });

        if self.items.len() == before {
            return Ok(());
        }

        self.persist()?;
        self.broadcast_changed();
        Ok(())
    }

    /// Set the quantity of an existing line.
    ///
    /// Fails silently (no state change, no write, no broadcast) when the
    /// quantity is below one or no line matches.
    ///
    /// # Errors
    ///
    /// [`CartError::Storage`] when the snapshot write fails.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
        size: Option<&str>,
    ) -> Result<(), CartError> {
        if quantity < 1 {
            return Ok(());
        }
        let Some(line) = self
            .items
            .iter_mut()
            .find(|item| item.matches(product_id, size))
        else {
            return Ok(());
        };
        if line.quantity == quantity {
            return Ok(());
        }

        line.quantity = quantity;
        self.persist()?;
        self.broadcast_changed();
        Ok(())
    }

    /// Empty the cart unconditionally.
    ///
    /// # Errors
    ///
    /// [`CartError::Storage`] when the snapshot write fails.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.items.clear();
        self.persist()?;
        self.broadcast_changed();
        Ok(())
    }

    /// Move a cart line to the wishlist.
    ///
    /// Finds the line for the (product id, size) pair (`size: None` matches
    /// the first line for the id), inserts an equivalent wishlist entry
    /// unless one is already present, then removes the cart line(s) with
    /// [`remove_item`](Self::remove_item) semantics. This is the one
    /// cross-store coupling in the system.
    ///
    /// # Errors
    ///
    /// [`CartError::LineNotFound`] when no line matches (both stores are
    /// left unchanged); [`CartError::Wishlist`] when the wishlist insert
    /// fails (the cart is left unchanged); [`CartError::Storage`] when the
    /// cart snapshot write fails.
    pub fn move_to_wishlist(
        &mut self,
        wishlist: &mut WishlistStore,
        product_id: &ProductId,
        size: Option<&str>,
    ) -> Result<(), CartError> {
        let line = self
            .items
            .iter()
            .find(|item| match size {
                Some(s) => item.matches(product_id, Some(s)),
                None => item.product_id == *product_id,
            })
            .ok_or_else(|| CartError::LineNotFound(product_id.clone()))?;

        wishlist.add_entry(WishlistItem::from(line))?;
        self.remove_item(product_id, size)
    }

    fn persist(&self) -> Result<(), StorageError> {
        persist_snapshot(self.storage.as_ref(), CART_STORAGE_KEY, &self.items)
    }

    fn broadcast_changed(&self) {
        // A send with no receivers is fine; nothing is mounted yet
        let _ = self.event_tx.send(StoreEvent::CartChanged {
            total_items: self.total_items(),
            subtotal: self.subtotal(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};

    fn product(id: &str, cents: i64, sale_cents: Option<i64>) -> Product {
        Product {
            id: ProductId::new(id),
            slug: id.to_owned(),
            name: format!("Product {id}"),
            description: String::new(),
            price: Decimal::new(cents, 2),
            sale_price: sale_cents.map(|c| Decimal::new(c, 2)),
            images: vec![format!("/images/{id}.jpg")],
            sizes: vec!["M".to_owned(), "L".to_owned()],
            collections: Vec::new(),
            in_stock: true,
            is_new: false,
            is_sale: sale_cents.is_some(),
            is_featured: false,
            rating: 4.0,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn store() -> CartStore {
        let mut cart = CartStore::new(Arc::new(MemoryStorage::new()));
        cart.hydrate();
        cart
    }

    #[test]
    fn test_add_twice_merges_into_one_line() {
        let mut cart = store();
        let shirt = product("p-1", 4800, None);

        cart.add_item(&shirt, Some("M"), 2).unwrap();
        cart.add_item(&shirt, Some("M"), 3).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_sizes_are_distinct_lines() {
        let mut cart = store();
        let shirt = product("p-1", 4800, None);

        cart.add_item(&shirt, Some("M"), 1).unwrap();
        cart.add_item(&shirt, Some("L"), 1).unwrap();
        cart.add_item(&shirt, None, 1).unwrap();

        assert_eq!(cart.items().len(), 3);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_zero_quantity_is_clamped_to_one() {
        let mut cart = store();
        cart.add_item(&product("p-1", 4800, None), None, 0).unwrap();
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_invalid_product_leaves_state_unchanged() {
        let mut cart = store();
        let mut bad = product("p-1", 4800, None);
        bad.images.clear();

        let result = cart.add_item(&bad, None, 1);
        assert!(matches!(result, Err(CartError::InvalidProduct(_))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_uses_effective_price() {
        let mut cart = store();
        // $48 regular, two of them
        cart.add_item(&product("p-1", 4800, None), Some("M"), 2)
            .unwrap();
        // $98 regular but on sale for $45
        cart.add_item(&product("p-2", 9800, Some(4500)), None, 1)
            .unwrap();

        assert_eq!(cart.subtotal(), Decimal::new(14100, 2));
    }

    #[test]
    fn test_remove_without_size_removes_all_sizes() {
        let mut cart = store();
        let shirt = product("p-1", 4800, None);
        cart.add_item(&shirt, Some("M"), 1).unwrap();
        cart.add_item(&shirt, Some("L"), 1).unwrap();
        cart.add_item(&product("p-2", 2200, None), None, 1).unwrap();

        cart.remove_item(&ProductId::new("p-1"), None).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product_id, ProductId::new("p-2"));
    }

    #[test]
    fn test_remove_with_size_removes_only_that_line() {
        let mut cart = store();
        let shirt = product("p-1", 4800, None);
        cart.add_item(&shirt, Some("M"), 1).unwrap();
        cart.add_item(&shirt, Some("L"), 1).unwrap();

        cart.remove_item(&ProductId::new("p-1"), Some("M")).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].size.as_deref(), Some("L"));
    }

    #[test]
    fn test_remove_missing_line_is_a_quiet_no_op() {
        let mut cart = store();
        cart.add_item(&product("p-1", 4800, None), None, 1).unwrap();

        let mut events = cart.subscribe();
        cart.remove_item(&ProductId::new("p-9"), None).unwrap();

        assert_eq!(cart.total_items(), 1);
        assert!(events.try_recv().is_err(), "no-op must not broadcast");
    }

    #[test]
    fn test_update_quantity_silent_failure_paths() {
        let mut cart = store();
        cart.add_item(&product("p-1", 4800, None), Some("M"), 2)
            .unwrap();

        // Below one: silently ignored
        cart.update_quantity(&ProductId::new("p-1"), 0, Some("M"))
            .unwrap();
        assert_eq!(cart.total_items(), 2);

        // No matching line: silently ignored
        cart.update_quantity(&ProductId::new("p-1"), 7, Some("L"))
            .unwrap();
        assert_eq!(cart.total_items(), 2);

        // Matching line: applied
        cart.update_quantity(&ProductId::new("p-1"), 7, Some("M"))
            .unwrap();
        assert_eq!(cart.total_items(), 7);
    }

    #[test]
    fn test_clear_empties_unconditionally() {
        let mut cart = store();
        cart.add_item(&product("p-1", 4800, None), None, 3).unwrap();
        cart.clear().unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_events_carry_post_mutation_totals() {
        let mut cart = store();
        let mut events = cart.subscribe();

        cart.add_item(&product("p-1", 4800, None), Some("M"), 2)
            .unwrap();

        let added = events.try_recv().unwrap();
        assert_eq!(
            added,
            StoreEvent::CartItemAdded {
                product_id: ProductId::new("p-1"),
                name: "Product p-1".to_owned(),
            }
        );
        let changed = events.try_recv().unwrap();
        assert_eq!(
            changed,
            StoreEvent::CartChanged {
                total_items: 2,
                subtotal: Decimal::new(9600, 2),
            }
        );
    }

    #[test]
    fn test_hydration_round_trip() {
        let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());

        let mut cart = CartStore::new(Arc::clone(&storage));
        assert!(!cart.is_ready());
        cart.hydrate();
        cart.add_item(&product("p-1", 4800, None), Some("M"), 2)
            .unwrap();

        // A second store over the same backend sees the snapshot
        let mut rehydrated = CartStore::new(storage);
        rehydrated.hydrate();
        assert!(rehydrated.is_ready());
        assert_eq!(rehydrated.total_items(), 2);
        assert_eq!(rehydrated.items()[0].size.as_deref(), Some("M"));
    }

    #[test]
    fn test_corrupt_snapshot_hydrates_empty() {
        let storage: Arc<dyn StorageBackend> = Arc::new(MemoryStorage::new());
        storage.write(CART_STORAGE_KEY, "{not json").unwrap();

        let mut cart = CartStore::new(storage);
        cart.hydrate();
        assert!(cart.is_ready());
        assert!(cart.is_empty());
    }
}
