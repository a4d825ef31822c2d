//! The product record and its validation rules.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ProductId;
use super::price::effective_price;

/// Validation errors for a product record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// The product ID is the empty string.
    #[error("product has an empty id")]
    EmptyId,

    /// The product has no images.
    #[error("product {0} has no images")]
    NoImages(ProductId),

    /// The regular price is zero or negative.
    #[error("product {0} has a non-positive price")]
    NonPositivePrice(ProductId),

    /// The sale price is not below the regular price.
    #[error("product {0} has a sale price that is not below the regular price")]
    InvalidSalePrice(ProductId),

    /// The rating falls outside the 0-5 scale.
    #[error("product {0} has a rating outside 0-5")]
    RatingOutOfRange(ProductId),
}

/// A product in the catalog.
///
/// Product records are created at build time from static data and never
/// mutated at runtime. Cart and wishlist entries snapshot the fields they
/// need at insertion time, so they hold no live reference back to this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// URL slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Plain text description.
    pub description: String,
    /// Regular price.
    pub price: Decimal,
    /// Sale price; must be below `price` when present.
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    /// Ordered image URLs (never empty for a valid record).
    pub images: Vec<String>,
    /// Available sizes (e.g., "XS".."XL"); empty for one-size products.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Collection slugs this product belongs to.
    #[serde(default)]
    pub collections: Vec<String>,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
    /// New-arrival badge.
    #[serde(default)]
    pub is_new: bool,
    /// On-sale badge.
    #[serde(default)]
    pub is_sale: bool,
    /// Featured placement on the home page.
    #[serde(default)]
    pub is_featured: bool,
    /// Average review rating on a 0-5 scale.
    #[serde(default)]
    pub rating: f64,
    /// Creation timestamp; drives newest-first sorting.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The price a buyer actually pays, per the canonical effective-price
    /// rule.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        effective_price(self.price, self.sale_price)
    }

    /// The first image, used as the card/snapshot image.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether the product carries a genuine discount.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.effective_price() < self.price
    }

    /// Whether the product offers the given size.
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Whether the product belongs to the given collection.
    #[must_use]
    pub fn in_collection(&self, collection: &str) -> bool {
        self.collections.iter().any(|c| c == collection)
    }

    /// Validate the record invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: empty ID, no images,
    /// non-positive price, sale price at or above the regular price, or a
    /// rating outside the 0-5 scale.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.images.is_empty() {
            return Err(ProductError::NoImages(self.id.clone()));
        }
        if self.price <= Decimal::ZERO {
            return Err(ProductError::NonPositivePrice(self.id.clone()));
        }
        if let Some(sale) = self.sale_price
            && sale >= self.price
        {
            return Err(ProductError::InvalidSalePrice(self.id.clone()));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ProductError::RatingOutOfRange(self.id.clone()));
        }
        Ok(())
    }
}
