use serde::Serialize;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the pagination control.
pub const RECORDS_PER_PAGE: [usize; 4] = [5, 10, 25, 100];

/// Filters sent with every list request.
///
/// `page_index` is 1-based here and 0-based in the pagination control. An
/// empty keyword is stored as `None` so that it never reaches the query string.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<String>,
    page_index: usize,
    page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl FilterState {
    pub fn new(page_size: usize) -> Self {
        Self {
            keyword: None,
            page_index: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based page index for the pagination control.
    pub fn display_page(&self) -> usize {
        self.page_index - 1
    }

    /// Replaces the keyword and returns to the first page.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = Some(keyword.into().trim().to_string()).filter(|k| !k.is_empty());
        self.page_index = 1;
    }

    /// Moves to the page selected in the (0-based) pagination control.
    pub fn set_display_page(&mut self, display_page: usize) {
        self.page_index = display_page + 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 1;
    }

    pub fn reset_page(&mut self) {
        self.page_index = 1;
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.set_keyword(keyword);
        self
    }

    #[must_use]
    pub fn with_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index.max(1);
        self
    }
}
