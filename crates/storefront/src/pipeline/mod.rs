//! The browse pipeline: filter, then sort, then paginate.
//!
//! Every step is a pure function of its inputs - no side effects, no
//! caching - and the whole pipeline is cheap enough to re-run synchronously
//! on every criteria or sort change. Pagination is a purely presentational
//! slicing step over the already-filtered-and-sorted list.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::{filter, matches};
pub use paginate::{Page, paginate};
pub use sort::sort;

use harlow_core::{FilterCriteria, Product, SortKey};

/// Run filter and sort in one call, returning an owned, ordered list.
#[must_use]
pub fn apply(products: &[Product], criteria: &FilterCriteria, sort_key: SortKey) -> Vec<Product> {
    let mut selected: Vec<Product> = filter(products, criteria).into_iter().cloned().collect();
    sort(&mut selected, sort_key);
    selected
}
