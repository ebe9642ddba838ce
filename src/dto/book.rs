//! DTOs shaped for the book list template.

use serde::Serialize;

use crate::dto::DialogView;
use crate::pagination::PaginationView;

/// One table row, with the category already resolved to its name.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookRow {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub category: Option<String>,
    pub edit_url: String,
}

/// Data required to render the book list page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookPageData {
    pub rows: Vec<BookRow>,
    /// Keyword echoed back into the search box.
    pub keyword: Option<String>,
    pub add_url: String,
    pub pagination: PaginationView,
    pub dialog: Option<DialogView>,
}
