//! REST-backed resource services.
//!
//! Every entity gets a reader/writer trait pair. [`ApiRepository`] implements
//! all of them on top of a shared `reqwest` client; the mocks in [`mock`]
//! implement them for tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::book::{Book, SaveBook};
use crate::domain::cart::{CartItem, NewCartItem, UpdateCartItem};
use crate::domain::category::{Category, SaveCategory};
use crate::domain::filter::FilterState;
use crate::domain::types::{BookId, CartItemId, CategoryId, UserId};
use crate::pagination::PagedResult;
use crate::repository::errors::{ApiError, ApiResult};

pub mod book;
pub mod cart;
pub mod category;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Path segment every resource lives under.
pub const API_PREFIX: &str = "api/";

#[async_trait]
pub trait BookReader {
    async fn list_books(&self, filters: &FilterState) -> ApiResult<PagedResult<Book>>;
    async fn search_books(&self, keyword: &str) -> ApiResult<PagedResult<Book>>;
    async fn get_book_by_id(&self, id: BookId) -> ApiResult<Book>;
}

#[async_trait]
pub trait BookWriter {
    /// Creates the book when it has no id, replaces it otherwise.
    async fn save_book(&self, book: &SaveBook) -> ApiResult<Book>;
    async fn delete_book(&self, id: BookId) -> ApiResult<()>;
}

#[async_trait]
pub trait CategoryReader {
    async fn list_categories(&self, filters: &FilterState) -> ApiResult<PagedResult<Category>>;
    async fn list_all_categories(&self) -> ApiResult<Vec<Category>>;
    async fn get_category_by_id(&self, id: CategoryId) -> ApiResult<Category>;
}

#[async_trait]
pub trait CategoryWriter {
    async fn save_category(&self, category: &SaveCategory) -> ApiResult<Category>;
    async fn delete_category(&self, id: CategoryId) -> ApiResult<()>;
}

#[async_trait]
pub trait CartReader {
    async fn list_cart(&self, user_id: UserId) -> ApiResult<Vec<CartItem>>;
}

#[async_trait]
pub trait CartWriter {
    async fn add_cart_item(&self, item: &NewCartItem) -> ApiResult<CartItem>;
    async fn update_cart_item(&self, item: &UpdateCartItem) -> ApiResult<CartItem>;
    async fn remove_cart_item(&self, id: CartItemId) -> ApiResult<()>;
}

/// Resource service backed by the bookstore REST API.
#[derive(Clone, Debug)]
pub struct ApiRepository {
    client: Client,
    base_url: String,
}

impl ApiRepository {
    /// Builds a repository with its own HTTP client.
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/api/{resource}{suffix}` with an optional encoded query.
    fn url<Q>(&self, resource: &str, suffix: &str, query: Option<&Q>) -> ApiResult<String>
    where
        Q: Serialize + ?Sized,
    {
        let mut url = format!("{}/{API_PREFIX}{resource}{suffix}", self.base_url);
        if let Some(query) = query {
            let encoded = encode_query(query)?;
            if !encoded.is_empty() {
                url.push('?');
                url.push_str(&encoded);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        log::debug!("{method} {url}");
        self.client.request(method, url)
    }

    async fn fetch<T, Q>(&self, resource: &str, suffix: &str, query: Option<&Q>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(resource, suffix, query)?;
        let body = send(self.request(Method::GET, url)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn submit<T, B>(&self, method: Method, resource: &str, payload: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url::<()>(resource, "", None)?;
        let body = send(self.request(method, url).json(payload)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn remove<I>(&self, resource: &str, id: I) -> ApiResult<()>
    where
        I: Into<i32>,
    {
        let id: i32 = id.into();
        let url = self.url(resource, "", Some(&[("id", id)][..]))?;
        send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}

/// Encodes query parameters; absent optional fields produce no pair at all.
pub fn encode_query<Q>(query: &Q) -> ApiResult<String>
where
    Q: Serialize + ?Sized,
{
    serde_html_form::to_string(query)
        .map_err(|err| ApiError::Unexpected(format!("Failed to encode query: {err}")))
}

/// Sends the request and returns the raw body of a successful response.
async fn send(request: RequestBuilder) -> ApiResult<Vec<u8>> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status, &body);
        log::error!("Backend call failed: {err}");
        return Err(err);
    }
    Ok(response.bytes().await?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_keyword_never_reaches_query() {
        let filters = FilterState::new(10).with_keyword("");

        assert_eq!(encode_query(&filters).unwrap(), "pageIndex=1&pageSize=10");
    }

    #[test]
    fn keyword_is_encoded_with_filters() {
        let filters = FilterState::new(25).with_keyword("war and peace");

        assert_eq!(
            encode_query(&filters).unwrap(),
            "keyword=war+and+peace&pageIndex=1&pageSize=25"
        );
    }

    #[test]
    fn urls_are_built_under_api_prefix() {
        let repo = ApiRepository::with_client(Client::new(), "http://localhost:5000/");

        assert_eq!(
            repo.url(book::ENDPOINT, "/byId", Some(&[("id", 3)][..])).unwrap(),
            "http://localhost:5000/api/book/byId?id=3"
        );
        assert_eq!(
            repo.url::<()>(cart::ENDPOINT, "", None).unwrap(),
            "http://localhost:5000/api/cart"
        );
    }
}
