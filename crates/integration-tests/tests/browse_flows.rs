//! Browse flows over the built-in catalog.
//!
//! Runs the real mock catalog through the filter/sort/paginate pipeline and
//! the query-string codec the way a product grid page does: decode the URL,
//! apply the pipeline, paginate, render cards.

use harlow_core::{FilterCriteria, PriceBucket, SortKey};
use harlow_integration_tests::init_tracing;
use harlow_storefront::catalog::Catalog;
use harlow_storefront::query::{self, BrowseState};
use harlow_storefront::views::ProductCardView;
use harlow_storefront::{StorefrontConfig, pipeline};

#[test]
fn test_filtered_browse_is_a_consistent_subset() {
    init_tracing();
    let catalog = Catalog::builtin().unwrap();

    let criteria = FilterCriteria {
        collections: vec!["tees".to_owned(), "shirts".to_owned()],
        in_stock_only: true,
        price_buckets: vec![PriceBucket::Under25, PriceBucket::From25To35],
        ..FilterCriteria::default()
    };
    let result = pipeline::apply(catalog.products(), &criteria, SortKey::PriceAscending);

    assert!(!result.is_empty());
    assert!(result.len() < catalog.len());
    for product in &result {
        assert!(catalog.get(&product.id).is_some(), "subset of the catalog");
        assert!(product.in_stock);
        assert!(product.in_collection("tees") || product.in_collection("shirts"));
        let price = product.effective_price();
        assert!(
            PriceBucket::Under25.contains(price) || PriceBucket::From25To35.contains(price),
            "{} at {price} escaped the price filter",
            product.id
        );
    }

    // Ascending by effective price
    let prices: Vec<_> = result.iter().map(harlow_core::Product::effective_price).collect();
    let mut sorted = prices.clone();
    sorted.sort();
    assert_eq!(prices, sorted);
}

#[test]
fn test_url_decode_pipeline_paginate_flow() {
    init_tracing();
    let catalog = Catalog::builtin().unwrap();
    let config = StorefrontConfig::default();

    // A shared URL lands on the grid
    let state = query::decode("collection=summer&sort=newest&page=1");
    assert_eq!(state.criteria.collections, vec!["summer"]);
    assert_eq!(state.sort, SortKey::Newest);

    let listed = pipeline::apply(catalog.products(), &state.criteria, state.sort);
    let page = pipeline::paginate(&listed, state.page, config.page_size);

    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_items, listed.len());
    assert!(page.items.len() <= config.page_size as usize);

    // Newest first within the page
    for pair in page.items.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    // The grid renders cards without touching raw prices
    let cards: Vec<ProductCardView> = page.items.iter().map(ProductCardView::from).collect();
    for card in &cards {
        assert!(card.price.starts_with('$'));
    }

    // And the state round-trips back into a URL
    let encoded = query::encode(&state);
    assert_eq!(query::decode(&encoded), state);
}

#[test]
fn test_pagination_covers_the_whole_catalog_exactly_once() {
    init_tracing();
    let catalog = Catalog::builtin().unwrap();
    let listed = pipeline::apply(
        catalog.products(),
        &FilterCriteria::default(),
        SortKey::Name,
    );

    let per_page = 5;
    let first = pipeline::paginate(&listed, 1, per_page);
    let mut seen = Vec::new();
    for page_number in 1..=first.total_pages {
        let page = pipeline::paginate(&listed, page_number, per_page);
        seen.extend(page.items.into_iter().map(|p| p.id));
    }

    let expected: Vec<_> = listed.iter().map(|p| p.id.clone()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_default_browse_state_is_the_whole_catalog() {
    init_tracing();
    let catalog = Catalog::builtin().unwrap();
    let state = BrowseState::new();

    let listed = pipeline::apply(catalog.products(), &state.criteria, state.sort);
    assert_eq!(listed.len(), catalog.len());
    assert_eq!(query::encode(&state), "");
}
