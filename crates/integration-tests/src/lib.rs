//! Integration tests for Harlow.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p harlow-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `browse_flows` - Catalog through pipeline through query codec
//! - `cart_wishlist_flows` - Store operations and the cross-store move
//! - `persistence` - File-backed snapshot round-trips
//!
//! The tests run fully offline: stores are exercised against in-memory and
//! temp-directory backends, never a browser or a network.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use harlow_core::{Product, ProductId};

/// Initialize test logging once; respects `RUST_LOG`.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Build a valid product fixture with sensible defaults.
#[must_use]
pub fn product_fixture(id: &str, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        slug: id.to_owned(),
        name: format!("Product {id}"),
        description: "Fixture product".to_owned(),
        price: Decimal::new(cents, 2),
        sale_price: None,
        images: vec![format!("/images/{id}.jpg")],
        sizes: vec!["S".to_owned(), "M".to_owned(), "L".to_owned()],
        collections: vec!["shirts".to_owned()],
        in_stock: true,
        is_new: false,
        is_sale: false,
        is_featured: false,
        rating: 4.0,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}
