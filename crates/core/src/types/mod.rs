//! Core types for Harlow.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod filter;
pub mod id;
pub mod price;
pub mod product;
pub mod wishlist;

pub use cart::CartItem;
pub use filter::{FilterCriteria, PriceBucket, SortKey};
pub use id::*;
pub use price::{effective_price, format_usd};
pub use product::{Product, ProductError};
pub use wishlist::WishlistItem;
