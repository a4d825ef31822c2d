//! Query-string codec for shareable browse state.
//!
//! Filter, sort, and page state is view-local and resets on navigation
//! unless it is carried in the URL. This codec round-trips a
//! [`BrowseState`] through the query-string parameters `collection`,
//! `size`, `price`, `in_stock`, `on_sale`, `new_arrivals`, `sort`, `view`,
//! and `page`, so a filtered product grid can be bookmarked or shared.
//!
//! Decoding is total: unknown keys and unparseable values are ignored and
//! missing parameters fall back to defaults - a mangled shared URL renders
//! the unfiltered grid instead of an error page.

use url::form_urlencoded;

use harlow_core::{FilterCriteria, PriceBucket, SortKey};

/// How the product list is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Card grid.
    #[default]
    Grid,
    /// Single-column list.
    List,
}

impl ViewMode {
    /// URL-safe slug.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    /// Parse a slug back into a view mode.
    #[must_use]
    pub fn parse_slug(slug: &str) -> Option<Self> {
        match slug {
            "grid" => Some(Self::Grid),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

/// The browse state a URL carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    /// Active filter criteria.
    pub criteria: FilterCriteria,
    /// Active sort key.
    pub sort: SortKey,
    /// Layout mode.
    pub view: ViewMode,
    /// 1-based page number.
    pub page: u32,
}

impl BrowseState {
    /// State for an unfiltered first page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            view: ViewMode::default(),
            page: 1,
        }
    }
}

/// Encode browse state as a query string (without the leading `?`).
///
/// Default-valued parameters are omitted, so the canonical unfiltered
/// first page encodes as the empty string.
#[must_use]
pub fn encode(state: &BrowseState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for collection in &state.criteria.collections {
        serializer.append_pair("collection", collection);
    }
    for size in &state.criteria.sizes {
        serializer.append_pair("size", size);
    }
    for bucket in &state.criteria.price_buckets {
        serializer.append_pair("price", bucket.slug());
    }
    if state.criteria.in_stock_only {
        serializer.append_pair("in_stock", "true");
    }
    if state.criteria.on_sale_only {
        serializer.append_pair("on_sale", "true");
    }
    if state.criteria.new_arrivals_only {
        serializer.append_pair("new_arrivals", "true");
    }
    if state.sort != SortKey::default() {
        serializer.append_pair("sort", state.sort.slug());
    }
    if state.view != ViewMode::default() {
        serializer.append_pair("view", state.view.slug());
    }
    if state.page > 1 {
        serializer.append_pair("page", &state.page.to_string());
    }

    serializer.finish()
}

/// Decode a query string (with or without the leading `?`).
#[must_use]
pub fn decode(query: &str) -> BrowseState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = BrowseState::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "collection" if !value.is_empty() => {
                state.criteria.collections.push(value.into_owned());
            }
            "size" if !value.is_empty() => {
                state.criteria.sizes.push(value.into_owned());
            }
            "price" => {
                if let Some(bucket) = PriceBucket::parse_slug(&value) {
                    state.criteria.price_buckets.push(bucket);
                }
            }
            "in_stock" => state.criteria.in_stock_only = parse_flag(&value),
            "on_sale" => state.criteria.on_sale_only = parse_flag(&value),
            "new_arrivals" => state.criteria.new_arrivals_only = parse_flag(&value),
            "sort" => {
                if let Some(sort) = SortKey::parse_slug(&value) {
                    state.sort = sort;
                }
            }
            "view" => {
                if let Some(view) = ViewMode::parse_slug(&value) {
                    state.view = view;
                }
            }
            "page" => {
                if let Ok(page) = value.parse::<u32>()
                    && page >= 1
                {
                    state.page = page;
                }
            }
            _ => {}
        }
    }

    state
}

fn parse_flag(value: &str) -> bool {
    matches!(value, "true" | "1")
}
