use async_trait::async_trait;
use reqwest::Method;

use crate::domain::cart::{CartItem, NewCartItem, UpdateCartItem};
use crate::domain::types::{CartItemId, UserId};
use crate::repository::errors::ApiResult;
use crate::repository::{ApiRepository, CartReader, CartWriter};

pub const ENDPOINT: &str = "cart";

#[async_trait]
impl CartReader for ApiRepository {
    async fn list_cart(&self, user_id: UserId) -> ApiResult<Vec<CartItem>> {
        self.fetch(ENDPOINT, "", Some(&[("userId", user_id.get())][..]))
            .await
    }
}

#[async_trait]
impl CartWriter for ApiRepository {
    async fn add_cart_item(&self, item: &NewCartItem) -> ApiResult<CartItem> {
        self.submit(Method::POST, ENDPOINT, item).await
    }

    async fn update_cart_item(&self, item: &UpdateCartItem) -> ApiResult<CartItem> {
        self.submit(Method::PUT, ENDPOINT, item).await
    }

    async fn remove_cart_item(&self, id: CartItemId) -> ApiResult<()> {
        self.remove(ENDPOINT, id).await
    }
}
