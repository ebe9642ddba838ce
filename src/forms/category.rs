use serde::Deserialize;
use validator::Validate;

use crate::domain::category::SaveCategory;
use crate::domain::types::{CategoryId, CategoryName};
use crate::forms::{FormError, existing_id};

#[derive(Debug, Deserialize, Validate)]
/// Form data for the add/edit category page.
pub struct SaveCategoryForm {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub name: String,
}

impl TryFrom<SaveCategoryForm> for SaveCategory {
    type Error = FormError;

    fn try_from(form: SaveCategoryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let id = existing_id(form.id)
            .map(CategoryId::new)
            .transpose()
            .map_err(|_| FormError::InvalidCategoryId)?;
        let name = CategoryName::new(form.name).map_err(|_| FormError::InvalidName)?;

        Ok(SaveCategory { id, name })
    }
}
