use serde::{Deserialize, Serialize};

use crate::domain::book::Book;
use crate::domain::types::{BookId, CartItemId, Quantity, UserId};

/// Cart entry owned by a user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub book_id: BookId,
    pub quantity: u32,
    /// Book details when the backend embeds them.
    #[serde(default)]
    pub book: Option<Book>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCartItem {
    pub user_id: UserId,
    pub book_id: BookId,
    pub quantity: Quantity,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub book_id: BookId,
    pub quantity: Quantity,
}
