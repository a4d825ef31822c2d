//! Browse criteria: filter groups, price buckets, and sort keys.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Filter criteria for a browse view.
///
/// Ephemeral, per-view state - never persisted. Matching is conjunctive
/// across groups (a product must pass every active group) and disjunctive
/// within a group (any selected value matches). An empty group is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected collection slugs.
    #[serde(default)]
    pub collections: Vec<String>,
    /// Selected size labels.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Selected price buckets.
    #[serde(default)]
    pub price_buckets: Vec<PriceBucket>,
    /// Only show purchasable products.
    #[serde(default)]
    pub in_stock_only: bool,
    /// Only show products on sale.
    #[serde(default)]
    pub on_sale_only: bool,
    /// Only show new arrivals.
    #[serde(default)]
    pub new_arrivals_only: bool,
}

impl FilterCriteria {
    /// Whether no group is active (every product passes).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
            && self.sizes.is_empty()
            && self.price_buckets.is_empty()
            && !self.in_stock_only
            && !self.on_sale_only
            && !self.new_arrivals_only
    }
}

/// Fixed, non-overlapping price ranges offered as filter choices.
///
/// A product matches a bucket when its effective price falls inside it.
/// Lower bounds are inclusive, upper bounds exclusive, so every price lands
/// in exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceBucket {
    /// Below $25.
    Under25,
    /// $25 up to (but not including) $35.
    From25To35,
    /// $35 up to (but not including) $50.
    From35To50,
    /// $50 and above.
    Over50,
}

impl PriceBucket {
    /// All buckets in ascending price order.
    pub const ALL: [Self; 4] = [
        Self::Under25,
        Self::From25To35,
        Self::From35To50,
        Self::Over50,
    ];

    /// Human-readable label for filter UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Under25 => "Under $25",
            Self::From25To35 => "$25 - $35",
            Self::From35To50 => "$35 - $50",
            Self::Over50 => "Over $50",
        }
    }

    /// URL-safe slug, used by the query-string codec.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Under25 => "under-25",
            Self::From25To35 => "25-35",
            Self::From35To50 => "35-50",
            Self::Over50 => "over-50",
        }
    }

    /// Parse a slug back into a bucket.
    #[must_use]
    pub fn parse_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.slug() == slug)
    }

    /// Whether an effective price falls inside this bucket.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        let (lower, upper) = self.bounds();
        price >= lower && upper.is_none_or(|limit| price < limit)
    }

    /// Inclusive lower bound and exclusive upper bound.
    fn bounds(&self) -> (Decimal, Option<Decimal>) {
        match self {
            Self::Under25 => (Decimal::ZERO, Some(Decimal::from(25))),
            Self::From25To35 => (Decimal::from(25), Some(Decimal::from(35))),
            Self::From35To50 => (Decimal::from(35), Some(Decimal::from(50))),
            Self::Over50 => (Decimal::from(50), None),
        }
    }
}

/// Sort keys for the browse pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order (no reordering).
    #[default]
    Featured,
    /// Effective price, cheapest first.
    PriceAscending,
    /// Effective price, most expensive first.
    PriceDescending,
    /// Newest first, by creation timestamp.
    Newest,
    /// Highest rated first.
    Rating,
    /// Name, lexically.
    Name,
}

impl SortKey {
    /// URL-safe slug, used by the query-string codec.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAscending => "price-asc",
            Self::PriceDescending => "price-desc",
            Self::Newest => "newest",
            Self::Rating => "rating",
            Self::Name => "name",
        }
    }

    /// Parse a slug back into a sort key.
    #[must_use]
    pub fn parse_slug(slug: &str) -> Option<Self> {
        match slug {
            "featured" => Some(Self::Featured),
            "price-asc" => Some(Self::PriceAscending),
            "price-desc" => Some(Self::PriceDescending),
            "newest" => Some(Self::Newest),
            "rating" => Some(Self::Rating),
            "name" => Some(Self::Name),
            _ => None,
        }
    }
}
