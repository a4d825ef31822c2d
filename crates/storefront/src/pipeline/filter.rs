//! Criteria matching for the browse pipeline.
//!
//! Matching is conjunctive across criteria groups and disjunctive within a
//! group: a product must pass every active group, and it passes a group by
//! matching any of the group's selected values. Empty groups are inactive.

use harlow_core::{FilterCriteria, Product};

/// Whether a single product satisfies the criteria.
#[must_use]
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    if !criteria.collections.is_empty()
        && !criteria.collections.iter().any(|c| product.in_collection(c))
    {
        return false;
    }

    if !criteria.sizes.is_empty() && !criteria.sizes.iter().any(|s| product.has_size(s)) {
        return false;
    }

    if !criteria.price_buckets.is_empty() {
        let price = product.effective_price();
        if !criteria.price_buckets.iter().any(|b| b.contains(price)) {
            return false;
        }
    }

    if criteria.in_stock_only && !product.in_stock {
        return false;
    }
    if criteria.on_sale_only && !product.is_sale {
        return false;
    }
    if criteria.new_arrivals_only && !product.is_new {
        return false;
    }

    true
}

/// Filter a product list, preserving input order.
///
/// The result is always a subset of the input; with empty criteria it is
/// the whole input.
#[must_use]
pub fn filter<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p, criteria)).collect()
}
