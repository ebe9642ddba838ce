use serde::{Deserialize, Serialize};

use crate::domain::filter::{FilterState, RECORDS_PER_PAGE};

/// One page of records plus the geometry of the whole result set.
///
/// `total_items` is authoritative for pagination controls; `items.len()` is
/// only the size of the current page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            page_index: 0,
            page_size: 0,
            total_pages: 1,
        }
    }
}

impl<T> PagedResult<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            page_index: self.page_index,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// State handed to the pagination control.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PaginationView {
    /// Total number of records across all pages.
    pub count: usize,
    pub rows_per_page: usize,
    /// Zero-based page index.
    pub page: usize,
    pub rows_per_page_options: Vec<usize>,
    /// One-based page links; `None` marks an elided range.
    pub pages: Vec<Option<usize>>,
}

impl PaginationView {
    pub fn new<T>(result: &PagedResult<T>, filters: &FilterState) -> Self {
        let rows_per_page = filters.page_size();
        let total_pages = result.total_items.div_ceil(rows_per_page);

        Self {
            count: result.total_items,
            rows_per_page,
            page: filters.display_page(),
            rows_per_page_options: RECORDS_PER_PAGE.to_vec(),
            pages: get_pages(total_pages, filters.page_index(), 2, 2, 4, 2),
        }
    }
}
