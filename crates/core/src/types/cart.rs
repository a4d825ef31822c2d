//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::effective_price;
use super::product::Product;

/// A line item in the cart.
///
/// Uniquely identified by the (product id, selected size) pair; the store
/// enforces at most one line per pair by merging quantities. The remaining
/// fields are a snapshot of the product at the time it was added, so later
/// catalog changes do not propagate into an open cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Selected size; `None` for one-size products.
    #[serde(default)]
    pub size: Option<String>,
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
    /// Positive quantity.
    pub quantity: u32,
}

impl CartItem {
    /// Snapshot a product into a new cart line.
    #[must_use]
    pub fn from_product(product: &Product, size: Option<&str>, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            size: size.map(str::to_owned),
            name: product.name.clone(),
            price: product.price,
            sale_price: product.sale_price,
            image: product.primary_image().map(str::to_owned),
            slug: product.slug.clone(),
            quantity,
        }
    }

    /// Line-key equality: same product and same selected size.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, size: Option<&str>) -> bool {
        self.product_id == *product_id && self.size.as_deref() == size
    }

    /// The per-unit price a buyer actually pays.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        effective_price(self.price, self.sale_price)
    }

    /// Effective price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.effective_price() * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, size: Option<&str>) -> CartItem {
        CartItem {
            product_id: ProductId::new(id),
            size: size.map(str::to_owned),
            name: "Relaxed Linen Shirt".to_owned(),
            price: Decimal::new(4800, 2),
            sale_price: Some(Decimal::new(3600, 2)),
            image: Some("/images/linen-shirt-01-a.jpg".to_owned()),
            slug: "relaxed-linen-shirt".to_owned(),
            quantity: 3,
        }
    }

    #[test]
    fn test_matches_compares_id_and_size() {
        let item = line("p-1", Some("M"));
        assert!(item.matches(&ProductId::new("p-1"), Some("M")));
        assert!(!item.matches(&ProductId::new("p-1"), Some("L")));
        assert!(!item.matches(&ProductId::new("p-1"), None));
        assert!(!item.matches(&ProductId::new("p-2"), Some("M")));
    }

    #[test]
    fn test_line_total_uses_effective_price() {
        let item = line("p-1", None);
        assert_eq!(item.line_total(), Decimal::new(10800, 2));
    }
}
