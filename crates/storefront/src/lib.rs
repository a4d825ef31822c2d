//! Harlow Storefront engine.
//!
//! The headless core of the Harlow storefront: a static product catalog,
//! the filter/sort/paginate browse pipeline, cart and wishlist stores with
//! snapshot persistence and change broadcasting, a reviews API client, the
//! query-string codec for shareable browse state, presentational view
//! models, and the style quiz.
//!
//! # Architecture
//!
//! Stores are explicit, dependency-injected objects: persistence
//! ([`storage::StorageBackend`]) and change notification (a broadcast
//! channel exposed via `subscribe()`) are injected collaborators, so every
//! store is unit-testable against an in-memory backend. Derived values
//! (cart totals) are plain pure functions over the item collections.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod query;
pub mod quiz;
pub mod reviews;
pub mod storage;
pub mod stores;
pub mod views;

pub use catalog::Catalog;
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use stores::{CartStore, StoreEvent, WishlistStore};
