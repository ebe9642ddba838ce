//! Async client for the bookstore admin backend.
//!
//! Resource services talk to the REST API, list controllers keep the state of
//! one list page, and the cart context tracks the authenticated user's cart.

use std::sync::Arc;

use crate::context::auth::AuthState;
use crate::context::cart::CartContext;
use crate::controller::ListController;
use crate::models::config::AppConfig;
use crate::notifications::Notifier;
use crate::repository::ApiRepository;
use crate::services::books::{BookList, book_page_data};
use crate::services::cart::cart_page_data;
use crate::services::categories::load_all_categories;
use crate::views::Views;

pub mod context;
pub mod controller;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod notifications;
pub mod pagination;
pub mod repository;
pub mod services;
pub mod views;

/// Loads the book list (optionally filtered by `keyword`) and the configured
/// user's cart, and returns both pages rendered as HTML.
pub async fn run(config: AppConfig, keyword: Option<String>) -> std::io::Result<String> {
    let repo = ApiRepository::new(&config.api_base_url, config.request_timeout())
        .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;

    let views = Views::new()
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let (notifier, _notifications) = Notifier::channel();

    let auth = AuthState::new(config.user_id);
    let cart = CartContext::new(repo.clone(), auth);

    let books = ListController::new(
        BookList::new(Arc::new(repo.clone())),
        config.list_config(),
        notifier,
    );
    books.mount();
    if let Some(keyword) = keyword {
        books.set_keyword(keyword);
    }

    // Load now instead of waiting out the debounce window.
    books
        .refresh()
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to load books: {e}")))?;
    books.unmount();

    let categories = load_all_categories(&repo).await.unwrap_or_else(|err| {
        log::error!("Failed to load categories: {err}");
        Vec::new()
    });

    let mut output = views
        .render_book_page(&book_page_data(&books, &categories))
        .map_err(std::io::Error::other)?;

    if config.user_id.is_some() {
        if let Err(err) = cart.update_cart().await {
            log::error!("Failed to load cart: {err}");
        }
        let cart_html = views
            .render_cart_page(&cart_page_data(&cart))
            .map_err(std::io::Error::other)?;
        output.push_str(&cart_html);
    }

    Ok(output)
}
