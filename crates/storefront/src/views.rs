//! Presentational read models.
//!
//! Flat, display-ready structs the rendering layer consumes: prices already
//! formatted, badges already chosen. Every price string goes through the
//! canonical effective-price rule, including the quick view.

use harlow_core::{CartItem, Product, WishlistItem, format_usd};

use crate::stores::{CartStore, WishlistStore};

/// Badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    New,
    Sale,
}

/// Product display data for grid and carousel cards.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub slug: String,
    pub name: String,
    /// Effective price, formatted.
    pub price: String,
    /// Regular price, formatted, when the product sells below it.
    pub compare_at_price: Option<String>,
    pub badge: Option<Badge>,
    pub image: Option<String>,
    pub rating: f64,
    pub in_stock: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            slug: product.slug.clone(),
            name: product.name.clone(),
            price: format_usd(product.effective_price()),
            compare_at_price: product
                .has_discount()
                .then(|| format_usd(product.price)),
            badge: if product.is_sale {
                Some(Badge::Sale)
            } else if product.is_new {
                Some(Badge::New)
            } else {
                None
            },
            image: product.primary_image().map(str::to_owned),
            rating: product.rating,
            in_stock: product.in_stock,
        }
    }
}

/// Quick-view modal display data.
#[derive(Debug, Clone)]
pub struct QuickView {
    pub card: ProductCardView,
    pub description: String,
    pub sizes: Vec<String>,
    /// Second image for the modal's hover state, when one exists.
    pub secondary_image: Option<String>,
}

impl From<&Product> for QuickView {
    fn from(product: &Product) -> Self {
        Self {
            card: ProductCardView::from(product),
            description: product.description.clone(),
            sizes: product.sizes.clone(),
            secondary_image: product.images.get(1).cloned(),
        }
    }
}

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub slug: String,
    pub name: String,
    pub size: Option<String>,
    pub quantity: u32,
    /// Effective unit price, formatted.
    pub price: String,
    /// Effective price x quantity, formatted.
    pub line_price: String,
    pub image: Option<String>,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            slug: item.slug.clone(),
            name: item.name.clone(),
            size: item.size.clone(),
            quantity: item.quantity,
            price: format_usd(item.effective_price()),
            line_price: format_usd(item.line_total()),
            image: item.image.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

impl From<&CartStore> for CartView {
    fn from(store: &CartStore) -> Self {
        Self {
            items: store.items().iter().map(CartLineView::from).collect(),
            subtotal: format_usd(store.subtotal()),
            item_count: store.total_items(),
        }
    }
}

/// Wishlist entry display data.
#[derive(Debug, Clone)]
pub struct WishlistEntryView {
    pub slug: String,
    pub name: String,
    /// Effective price, formatted.
    pub price: String,
    pub image: Option<String>,
}

impl From<&WishlistItem> for WishlistEntryView {
    fn from(item: &WishlistItem) -> Self {
        Self {
            slug: item.slug.clone(),
            name: item.name.clone(),
            price: format_usd(item.effective_price()),
            image: item.image.clone(),
        }
    }
}

/// Wishlist display data.
#[derive(Debug, Clone)]
pub struct WishlistView {
    pub items: Vec<WishlistEntryView>,
    pub item_count: usize,
}

impl From<&WishlistStore> for WishlistView {
    fn from(store: &WishlistStore) -> Self {
        Self {
            items: store.items().iter().map(WishlistEntryView::from).collect(),
            item_count: store.total_items(),
        }
    }
}
