// ── Pagination normalizer ──
//
// Every list endpoint reports its counters a little differently (Fractal
// `meta.pagination`, flat `total`/`per_page`/`page`, or nothing at all).
// This module folds them into one canonical shape.

use serde::{Deserialize, Serialize};

use panel_api::wire::RawPaginationMeta;

/// Canonical pagination counters. All fields are non-negative and
/// `current_page` is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub per_page: u32,
}

impl Pagination {
    /// Zero items, zero pages, page 1.
    pub const fn empty() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_items: 0,
            per_page: 0,
        }
    }

    /// Normalize raw counters. Missing `total_pages` is derived from
    /// `total` and `per_page`.
    pub fn from_meta(meta: Option<&RawPaginationMeta>) -> Self {
        let Some(meta) = meta else {
            return Self::empty();
        };

        let total_items = u64::try_from(meta.total).unwrap_or(0);
        let per_page = clamp_u32(meta.per_page);
        let current_page = clamp_u32(meta.current_page).max(1);
        let total_pages = match meta.total_pages {
            Some(pages) if pages >= 0 => clamp_u32(pages),
            _ => page_count(total_items, per_page),
        };

        Self {
            current_page,
            total_pages,
            total_items,
            per_page,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::empty()
    }
}

/// `ceil(total / per_page)`, or 0 when `per_page` is 0.
fn page_count(total_items: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    u32::try_from(total_items.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX)
}

fn clamp_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// A page of items plus canonical counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PaginatedResult<T> {
    /// Placeholder before the first fetch completes.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::empty(),
        }
    }

    /// Wrap a list with its counters.
    ///
    /// Without counters the list is treated as one complete page. With
    /// counters, `total_items` never reports fewer items than were received.
    pub fn from_list(items: Vec<T>, meta: Option<&RawPaginationMeta>) -> Self {
        let received = u64::try_from(items.len()).unwrap_or(u64::MAX);

        let pagination = match meta {
            Some(meta) => {
                let mut pagination = Pagination::from_meta(Some(meta));
                pagination.total_items = pagination.total_items.max(received);
                pagination
            }
            None => Pagination {
                current_page: 1,
                total_pages: u32::from(!items.is_empty()),
                total_items: received,
                per_page: u32::try_from(items.len()).unwrap_or(u32::MAX),
            },
        };

        Self { items, pagination }
    }

    /// Append one item, keeping the counters consistent with it.
    pub fn push(&mut self, item: T) {
        let whole = self.is_whole();
        self.items.push(item);
        self.pagination.total_items += 1;
        self.recount(whole);
    }

    /// Keep the items matching `keep`. Returns how many were removed.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> usize {
        let whole = self.is_whole();
        let before = self.items.len();
        self.items.retain(keep);
        let removed = before - self.items.len();
        if removed > 0 {
            let removed = u64::try_from(removed).unwrap_or(u64::MAX);
            self.pagination.total_items = self.pagination.total_items.saturating_sub(removed);
            self.recount(whole);
        }
        removed
    }

    /// Every item is on this one page.
    fn is_whole(&self) -> bool {
        self.pagination.total_pages <= 1
            && self.pagination.total_items == u64::try_from(self.items.len()).unwrap_or(u64::MAX)
    }

    /// A whole list stays one page as it grows; a server page keeps its
    /// `per_page` and recounts its pages.
    fn recount(&mut self, whole: bool) {
        let pagination = &mut self.pagination;
        if whole {
            pagination.per_page = pagination
                .per_page
                .max(u32::try_from(self.items.len()).unwrap_or(u32::MAX));
        }
        pagination.total_pages = page_count(pagination.total_items, pagination.per_page);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for PaginatedResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T> IntoIterator for &'a PaginatedResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn meta(current_page: i64, total: i64, per_page: i64) -> RawPaginationMeta {
        RawPaginationMeta {
            total,
            per_page,
            current_page,
            ..RawPaginationMeta::default()
        }
    }

    #[test]
    fn computes_total_pages() {
        let p = Pagination::from_meta(Some(&meta(2, 45, 20)));
        assert_eq!(
            p,
            Pagination {
                current_page: 2,
                total_pages: 3,
                total_items: 45,
                per_page: 20,
            }
        );
        assert!(p.has_next_page());
        assert!(p.has_previous_page());
    }

    #[test]
    fn absent_meta_is_empty_set() {
        assert_eq!(Pagination::from_meta(None), Pagination::empty());
        let empty = Pagination::empty();
        assert_eq!(empty.current_page, 1);
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.total_items, 0);
        assert!(!empty.has_next_page());
    }

    #[test]
    fn explicit_total_pages_wins() {
        let raw = RawPaginationMeta {
            total_pages: Some(7),
            ..meta(1, 45, 20)
        };
        assert_eq!(Pagination::from_meta(Some(&raw)).total_pages, 7);
    }

    #[test]
    fn negative_and_zero_counters_clamp() {
        let p = Pagination::from_meta(Some(&meta(0, -5, 0)));
        assert_eq!(p.current_page, 1);
        assert_eq!(p.total_items, 0);
        assert_eq!(p.total_pages, 0);
    }

    #[test]
    fn bare_list_is_single_page() {
        let result = PaginatedResult::from_list(vec!["a", "b", "c"], None);
        assert_eq!(result.pagination.total_items, 3);
        assert_eq!(result.pagination.total_pages, 1);
        assert_eq!(result.pagination.per_page, 3);
        assert!(result.pagination.total_items >= u64::try_from(result.len()).unwrap_or(0));

        let empty: PaginatedResult<&str> = PaginatedResult::from_list(Vec::new(), None);
        assert_eq!(empty.pagination.total_pages, 0);
    }

    #[test]
    fn bare_list_stays_one_page_through_edits() {
        let mut result = PaginatedResult::from_list(vec!["a", "b"], None);
        result.push("c");
        assert_eq!(
            result.pagination,
            Pagination {
                current_page: 1,
                total_pages: 1,
                total_items: 3,
                per_page: 3,
            }
        );

        assert_eq!(result.retain(|s| *s != "a" && *s != "b" && *s != "c"), 3);
        assert_eq!(result.pagination.total_items, 0);
        assert_eq!(result.pagination.total_pages, 0);

        let mut empty: PaginatedResult<&str> = PaginatedResult::empty();
        empty.push("first");
        assert_eq!(empty.pagination.total_pages, 1);
        assert_eq!(empty.pagination.per_page, 1);
    }

    #[test]
    fn server_page_recounts_pages() {
        let items: Vec<u32> = (0..20).collect();
        let mut result = PaginatedResult::from_list(items, Some(&meta(1, 40, 20)));
        assert_eq!(result.pagination.total_pages, 2);

        result.push(20);
        assert_eq!(result.pagination.total_items, 41);
        assert_eq!(result.pagination.total_pages, 3);
        assert_eq!(result.pagination.per_page, 20);

        assert_eq!(result.retain(|n| *n != 0), 1);
        assert_eq!(result.pagination.total_items, 40);
        assert_eq!(result.pagination.total_pages, 2);
        assert_eq!(result.retain(|n| *n != 0), 0);
    }

    #[test]
    fn undercounted_total_is_raised() {
        let result = PaginatedResult::from_list(vec![1, 2, 3], Some(&meta(1, 1, 50)));
        assert_eq!(result.pagination.total_items, 3);
    }
}
