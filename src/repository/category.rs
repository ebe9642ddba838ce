use async_trait::async_trait;
use reqwest::Method;

use crate::domain::category::{Category, SaveCategory};
use crate::domain::filter::FilterState;
use crate::domain::types::CategoryId;
use crate::pagination::PagedResult;
use crate::repository::errors::ApiResult;
use crate::repository::{ApiRepository, CategoryReader, CategoryWriter};

pub const ENDPOINT: &str = "category";

#[async_trait]
impl CategoryReader for ApiRepository {
    async fn list_categories(&self, filters: &FilterState) -> ApiResult<PagedResult<Category>> {
        self.fetch(ENDPOINT, "", Some(filters)).await
    }

    async fn list_all_categories(&self) -> ApiResult<Vec<Category>> {
        self.fetch::<_, ()>(ENDPOINT, "/all", None).await
    }

    async fn get_category_by_id(&self, id: CategoryId) -> ApiResult<Category> {
        self.fetch(ENDPOINT, "/byId", Some(&[("id", id.get())][..]))
            .await
    }
}

#[async_trait]
impl CategoryWriter for ApiRepository {
    async fn save_category(&self, category: &SaveCategory) -> ApiResult<Category> {
        let method = if category.is_update() {
            Method::PUT
        } else {
            Method::POST
        };
        self.submit(method, ENDPOINT, category).await
    }

    async fn delete_category(&self, id: CategoryId) -> ApiResult<()> {
        self.remove(ENDPOINT, id).await
    }
}
