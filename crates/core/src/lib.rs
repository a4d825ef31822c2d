//! Harlow Core - Shared domain types.
//!
//! This crate provides the domain types used across all Harlow components:
//! - `storefront` - Catalog, browse pipeline, cart/wishlist stores, reviews
//! - `integration-tests` - Cross-module scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients, no filesystem access. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, pricing, products, cart/wishlist items, and
//!   browse criteria

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
