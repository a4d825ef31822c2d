//! Static product catalog held in memory.
//!
//! The catalog is loaded once at startup - either from the mock data file
//! embedded at build time ([`Catalog::builtin`]) or from a data directory on
//! disk ([`Catalog::load`]) - and is read-only afterwards. Invalid product
//! records are logged and skipped rather than failing the whole load, so a
//! single bad record never takes the storefront down.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use harlow_core::{Product, ProductId};

/// File name of the product data inside the data directory.
const PRODUCTS_FILE: &str = "products.json";

/// Mock product data embedded at build time.
const BUILTIN_PRODUCTS: &str = include_str!("../data/products.json");

/// Errors loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// In-memory product catalog.
///
/// Cheaply cloneable; the product list is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
    by_id: Arc<HashMap<ProductId, usize>>,
    by_slug: Arc<HashMap<String, usize>>,
}

impl Catalog {
    /// Load the catalog from `<data_dir>/products.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    /// Individual invalid records are skipped, not fatal.
    pub fn load(data_dir: &Path) -> Result<Self, CatalogError> {
        let path = data_dir.join(PRODUCTS_FILE);
        let raw = std::fs::read_to_string(&path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Build the catalog from the mock data embedded at build time.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data is not valid JSON.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PRODUCTS)
    }

    /// Build a catalog from an already-loaded product list.
    ///
    /// Invalid records are logged and skipped; a record whose id or slug
    /// duplicates an earlier one is skipped the same way.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut kept: Vec<Product> = Vec::with_capacity(products.len());
        let mut by_id = HashMap::new();
        let mut by_slug = HashMap::new();

        for product in products {
            if let Err(e) = product.validate() {
                tracing::error!(product_id = %product.id, error = %e, "Skipping invalid product");
                continue;
            }
            if by_id.contains_key(&product.id) {
                tracing::error!(product_id = %product.id, "Skipping duplicate product id");
                continue;
            }
            if by_slug.contains_key(&product.slug) {
                tracing::error!(slug = %product.slug, "Skipping duplicate product slug");
                continue;
            }

            by_id.insert(product.id.clone(), kept.len());
            by_slug.insert(product.slug.clone(), kept.len());
            kept.push(product);
        }

        Self {
            products: Arc::new(kept),
            by_id: Arc::new(by_id),
            by_slug: Arc::new(by_slug),
        }
    }

    fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::from_products(products))
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).and_then(|&idx| self.products.get(idx))
    }

    /// Look up a product by URL slug (quick-view lookup).
    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<&Product> {
        self.by_slug
            .get(slug)
            .and_then(|&idx| self.products.get(idx))
    }

    /// Products flagged for featured placement.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured).collect()
    }

    /// Products flagged as new arrivals.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// Products flagged as on sale.
    #[must_use]
    pub fn on_sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_sale).collect()
    }

    /// Products in the given collection.
    #[must_use]
    pub fn in_collection(&self, collection: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.in_collection(collection))
            .collect()
    }

    /// All distinct collection slugs, sorted.
    #[must_use]
    pub fn collections(&self) -> Vec<String> {
        let mut collections: Vec<String> = self
            .products
            .iter()
            .flat_map(|p| p.collections.clone())
            .collect();
        collections.sort();
        collections.dedup();
        collections
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
