use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SaveCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    pub name: CategoryName,
}

impl SaveCategory {
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }
}

/// Looks up the display name for `id` in a fetched category set.
pub fn category_name(categories: &[Category], id: CategoryId) -> Option<&str> {
    categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.name.as_str())
}
