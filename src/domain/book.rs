use serde::{Deserialize, Serialize};

use crate::domain::types::{BookId, BookName, CategoryId, Price};

/// Book as returned by the backend.
///
/// `category_id` is a foreign key. The category name is resolved against a
/// separately fetched category set when the page is rendered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
    #[serde(default)]
    pub description: String,
    /// Cover image encoded as a data URL.
    #[serde(default)]
    pub base64image: String,
}

/// Full-record payload used for both create and update.
///
/// The presence of `id` decides the verb: `PUT` when set, `POST` otherwise.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<BookId>,
    pub name: BookName,
    pub price: Price,
    pub category_id: CategoryId,
    pub description: String,
    pub base64image: String,
}

impl SaveBook {
    #[must_use]
    pub fn new(
        id: Option<BookId>,
        name: BookName,
        price: Price,
        category_id: CategoryId,
        description: String,
        base64image: String,
    ) -> Self {
        Self {
            id,
            name,
            price,
            category_id,
            description: description.trim().to_string(),
            base64image,
        }
    }

    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }
}
