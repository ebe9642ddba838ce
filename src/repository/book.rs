use async_trait::async_trait;
use reqwest::Method;

use crate::domain::book::{Book, SaveBook};
use crate::domain::filter::FilterState;
use crate::domain::types::BookId;
use crate::pagination::PagedResult;
use crate::repository::errors::ApiResult;
use crate::repository::{ApiRepository, BookReader, BookWriter};

pub const ENDPOINT: &str = "book";

#[async_trait]
impl BookReader for ApiRepository {
    async fn list_books(&self, filters: &FilterState) -> ApiResult<PagedResult<Book>> {
        self.fetch(ENDPOINT, "", Some(filters)).await
    }

    async fn search_books(&self, keyword: &str) -> ApiResult<PagedResult<Book>> {
        self.fetch(ENDPOINT, "/search", Some(&[("keyword", keyword)][..]))
            .await
    }

    async fn get_book_by_id(&self, id: BookId) -> ApiResult<Book> {
        self.fetch(ENDPOINT, "/byId", Some(&[("id", id.get())][..]))
            .await
    }
}

#[async_trait]
impl BookWriter for ApiRepository {
    async fn save_book(&self, book: &SaveBook) -> ApiResult<Book> {
        let method = if book.is_update() {
            Method::PUT
        } else {
            Method::POST
        };
        self.submit(method, ENDPOINT, book).await
    }

    async fn delete_book(&self, id: BookId) -> ApiResult<()> {
        self.remove(ENDPOINT, id).await
    }
}
