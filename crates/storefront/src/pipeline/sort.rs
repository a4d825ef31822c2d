//! Sort comparators for the browse pipeline.
//!
//! All sorts are stable: equal keys keep their prior relative order, so
//! chained re-sorts behave predictably in the UI.

use std::cmp::Ordering;

use harlow_core::{Product, SortKey};

/// Sort a product list in place by the given key.
///
/// `SortKey::Featured` leaves the list in catalog order.
pub fn sort(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Featured => {}
        SortKey::PriceAscending => {
            products.sort_by_key(Product::effective_price);
        }
        SortKey::PriceDescending => {
            products.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()));
        }
        SortKey::Newest => {
            products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        SortKey::Rating => {
            products.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortKey::Name => {
            products.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use harlow_core::ProductId;
    use rust_decimal::Decimal;

    fn product(id: &str, cents: i64, sale_cents: Option<i64>, day: u32, rating: f64) -> Product {
        Product {
            id: ProductId::new(id),
            slug: id.to_owned(),
            name: format!("Product {id}"),
            description: String::new(),
            price: Decimal::new(cents, 2),
            sale_price: sale_cents.map(|c| Decimal::new(c, 2)),
            images: vec![format!("/images/{id}.jpg")],
            sizes: Vec::new(),
            collections: Vec::new(),
            in_stock: true,
            is_new: false,
            is_sale: false,
            is_featured: false,
            rating,
            created_at: Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap(),
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_price_ascending_uses_effective_price() {
        let mut products = vec![
            product("a", 3000, None, 1, 4.0),
            // Regular price $40, on sale for $10
            product("b", 4000, Some(1000), 1, 4.0),
            product("c", 2000, None, 1, 4.0),
        ];
        sort(&mut products, SortKey::PriceAscending);
        assert_eq!(ids(&products), ["b", "c", "a"]);
    }

    #[test]
    fn test_price_descending_reverses_ascending_without_ties() {
        let mut ascending = vec![
            product("a", 3000, None, 1, 4.0),
            product("b", 1000, None, 1, 4.0),
            product("c", 2000, None, 1, 4.0),
        ];
        let mut descending = ascending.clone();

        sort(&mut ascending, SortKey::PriceAscending);
        sort(&mut descending, SortKey::PriceDescending);

        let mut reversed = ids(&ascending);
        reversed.reverse();
        assert_eq!(ids(&descending), reversed);
    }

    #[test]
    fn test_newest_sorts_by_created_at_descending() {
        let mut products = vec![
            product("older", 3000, None, 1, 4.0),
            product("newer", 2000, None, 9, 4.0),
        ];
        sort(&mut products, SortKey::Newest);
        assert_eq!(ids(&products), ["newer", "older"]);
    }

    #[test]
    fn test_rating_descending_and_name_lexical() {
        let mut products = vec![
            product("b", 3000, None, 1, 3.5),
            product("a", 3000, None, 1, 4.8),
        ];
        sort(&mut products, SortKey::Rating);
        assert_eq!(ids(&products), ["a", "b"]);

        sort(&mut products, SortKey::Name);
        assert_eq!(ids(&products), ["a", "b"]);
    }

    #[test]
    fn test_ties_preserve_prior_relative_order() {
        // Same price everywhere: the input order must survive
        let mut products = vec![
            product("first", 3000, None, 1, 4.0),
            product("second", 3000, None, 2, 4.0),
            product("third", 3000, None, 3, 4.0),
        ];
        sort(&mut products, SortKey::PriceAscending);
        assert_eq!(ids(&products), ["first", "second", "third"]);
    }

    #[test]
    fn test_featured_keeps_catalog_order() {
        let mut products = vec![
            product("z", 9000, None, 1, 1.0),
            product("a", 1000, None, 9, 5.0),
        ];
        sort(&mut products, SortKey::Featured);
        assert_eq!(ids(&products), ["z", "a"]);
    }
}
