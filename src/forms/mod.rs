//! Form definitions backing the add/edit pages.

use thiserror::Error;
use validator::ValidationErrors;

pub mod book;
pub mod cart;
pub mod category;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid book id")]
    InvalidBookId,

    #[error("invalid category id")]
    InvalidCategoryId,

    #[error("invalid cart item id")]
    InvalidCartItemId,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid price")]
    InvalidPrice,

    #[error("invalid quantity")]
    InvalidQuantity,
}

/// Treats a missing or zero id as "create".
fn existing_id(id: Option<i32>) -> Option<i32> {
    id.filter(|id| *id != 0)
}
