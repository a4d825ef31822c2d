//! Presentational pagination over an already-filtered-and-sorted list.

use serde::Serialize;

/// One page of a longer list, with the navigation facts a view needs.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The items on this page, in list order.
    pub items: Vec<T>,
    /// 1-based page number actually served (requested page 0 becomes 1).
    pub current_page: u32,
    /// Page size used for the slice.
    pub per_page: u32,
    /// Length of the full list.
    pub total_items: usize,
    /// Number of pages in the full list (at least 1).
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }
}

/// Slice out one page: `list[(page-1)*per_page .. page*per_page]`.
///
/// Carries no business invariant beyond `per_page > 0` (zero is clamped to
/// 1). Page 0 is treated as page 1, and a page past the end yields an empty
/// slice rather than a panic, so a stale bookmarked URL still renders.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> Page<T> {
    let per_page = per_page.max(1);
    let current_page = page.max(1);

    let total_items = items.len();
    let total_pages = u32::try_from(total_items.div_ceil(per_page as usize))
        .unwrap_or(u32::MAX)
        .max(1);

    let start = (current_page as usize - 1).saturating_mul(per_page as usize);
    let page_items: Vec<T> = items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    Page {
        items: page_items,
        current_page,
        per_page,
        total_items,
        total_pages,
    }
}
