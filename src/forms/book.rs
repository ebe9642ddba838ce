use serde::Deserialize;
use validator::Validate;

use crate::domain::book::SaveBook;
use crate::domain::types::{BookId, BookName, CategoryId, Price};
use crate::forms::{FormError, existing_id};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data for the add/edit book page.
pub struct SaveBookForm {
    /// Present when editing an existing book.
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[serde(default)]
    pub base64image: String,
}

impl TryFrom<SaveBookForm> for SaveBook {
    type Error = FormError;

    fn try_from(form: SaveBookForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let id = existing_id(form.id)
            .map(BookId::new)
            .transpose()
            .map_err(|_| FormError::InvalidBookId)?;
        let name = BookName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let price = Price::new(form.price).map_err(|_| FormError::InvalidPrice)?;
        let category_id =
            CategoryId::new(form.category_id).map_err(|_| FormError::InvalidCategoryId)?;
        let description = ammonia::clean(&form.description);

        Ok(SaveBook::new(
            id,
            name,
            price,
            category_id,
            description,
            form.base64image,
        ))
    }
}
