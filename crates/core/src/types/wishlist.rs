//! Wishlist entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::id::ProductId;
use super::price::effective_price;
use super::product::Product;

/// A saved product reference.
///
/// Keyed by product id only - the wishlist has no size or quantity
/// dimension. Like [`CartItem`], the display fields are a snapshot taken at
/// insertion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Product this entry refers to.
    pub product_id: ProductId,
    /// Product name at insertion time.
    pub name: String,
    /// Regular price at insertion time.
    pub price: Decimal,
    /// Sale price at insertion time.
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    /// Primary image URL at insertion time.
    #[serde(default)]
    pub image: Option<String>,
    /// Product slug at insertion time.
    pub slug: String,
}

impl WishlistItem {
    /// Snapshot a product into a wishlist entry.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            sale_price: product.sale_price,
            image: product.primary_image().map(str::to_owned),
            slug: product.slug.clone(),
        }
    }

    /// The per-unit price a buyer would pay today.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        effective_price(self.price, self.sale_price)
    }
}

impl From<&CartItem> for WishlistItem {
    /// Carry a cart line's snapshot over when moving it to the wishlist.
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            price: item.price,
            sale_price: item.sale_price,
            image: item.image.clone(),
            slug: item.slug.clone(),
        }
    }
}
