use serde::Serialize;

use crate::dto::DialogView;
use crate::pagination::PaginationView;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
    pub edit_url: String,
}

/// Data required to render the category list page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryPageData {
    pub rows: Vec<CategoryRow>,
    pub keyword: Option<String>,
    pub add_url: String,
    pub pagination: PaginationView,
    pub dialog: Option<DialogView>,
}
