//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::book::{Book, SaveBook};
use crate::domain::cart::{CartItem, NewCartItem, UpdateCartItem};
use crate::domain::category::{Category, SaveCategory};
use crate::domain::filter::FilterState;
use crate::domain::types::{BookId, CartItemId, CategoryId, UserId};
use crate::pagination::PagedResult;
use crate::repository::errors::ApiResult;
use crate::repository::{
    BookReader, BookWriter, CartReader, CartWriter, CategoryReader, CategoryWriter,
};

mock! {
    pub Repository {}

    #[async_trait]
    impl BookReader for Repository {
        async fn list_books(&self, filters: &FilterState) -> ApiResult<PagedResult<Book>>;
        async fn search_books(&self, keyword: &str) -> ApiResult<PagedResult<Book>>;
        async fn get_book_by_id(&self, id: BookId) -> ApiResult<Book>;
    }

    #[async_trait]
    impl BookWriter for Repository {
        async fn save_book(&self, book: &SaveBook) -> ApiResult<Book>;
        async fn delete_book(&self, id: BookId) -> ApiResult<()>;
    }

    #[async_trait]
    impl CategoryReader for Repository {
        async fn list_categories(&self, filters: &FilterState) -> ApiResult<PagedResult<Category>>;
        async fn list_all_categories(&self) -> ApiResult<Vec<Category>>;
        async fn get_category_by_id(&self, id: CategoryId) -> ApiResult<Category>;
    }

    #[async_trait]
    impl CategoryWriter for Repository {
        async fn save_category(&self, category: &SaveCategory) -> ApiResult<Category>;
        async fn delete_category(&self, id: CategoryId) -> ApiResult<()>;
    }

    #[async_trait]
    impl CartReader for Repository {
        async fn list_cart(&self, user_id: UserId) -> ApiResult<Vec<CartItem>>;
    }

    #[async_trait]
    impl CartWriter for Repository {
        async fn add_cart_item(&self, item: &NewCartItem) -> ApiResult<CartItem>;
        async fn update_cart_item(&self, item: &UpdateCartItem) -> ApiResult<CartItem>;
        async fn remove_cart_item(&self, id: CartItemId) -> ApiResult<()>;
    }
}
