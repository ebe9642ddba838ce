use serde::Deserialize;
use validator::Validate;

use crate::domain::cart::{NewCartItem, UpdateCartItem};
use crate::domain::types::{BookId, CartItemId, Quantity, UserId};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data for putting a book into the cart.
pub struct AddToCartForm {
    pub book_id: i32,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data for changing the quantity of a cart entry.
pub struct UpdateCartForm {
    pub id: i32,
    pub book_id: i32,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

impl AddToCartForm {
    pub fn into_domain(self, user_id: UserId) -> Result<NewCartItem, FormError> {
        self.validate()?;
        Ok(NewCartItem {
            user_id,
            book_id: BookId::new(self.book_id).map_err(|_| FormError::InvalidBookId)?,
            quantity: Quantity::new(self.quantity).map_err(|_| FormError::InvalidQuantity)?,
        })
    }
}

impl UpdateCartForm {
    pub fn into_domain(self, user_id: UserId) -> Result<UpdateCartItem, FormError> {
        self.validate()?;
        Ok(UpdateCartItem {
            id: CartItemId::new(self.id).map_err(|_| FormError::InvalidCartItemId)?,
            user_id,
            book_id: BookId::new(self.book_id).map_err(|_| FormError::InvalidBookId)?,
            quantity: Quantity::new(self.quantity).map_err(|_| FormError::InvalidQuantity)?,
        })
    }
}
