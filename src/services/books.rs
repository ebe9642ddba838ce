//! Services behind the book list and the add/edit book pages.

use std::sync::Arc;

use async_trait::async_trait;

use crate::controller::{ListController, ListSource};
use crate::domain::book::{Book, SaveBook};
use crate::domain::category::{Category, category_name};
use crate::domain::filter::FilterState;
use crate::domain::types::BookId;
use crate::dto::DialogView;
use crate::dto::book::{BookPageData, BookRow};
use crate::forms::book::SaveBookForm;
use crate::notifications::{Notifier, SAVE_FAIL, SAVE_SUCCESS};
use crate::pagination::{PagedResult, PaginationView};
use crate::repository::errors::ApiResult;
use crate::repository::{BookReader, BookWriter, book};
use crate::services::ServiceResult;

/// Book endpoints exposed to a [`ListController`].
pub struct BookList<R> {
    repo: Arc<R>,
}

impl<R> BookList<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListSource for BookList<R>
where
    R: BookReader + BookWriter + Send + Sync + 'static,
{
    type Item = Book;
    type Id = BookId;

    const RESOURCE: &'static str = book::ENDPOINT;

    async fn fetch(&self, filters: &FilterState) -> ApiResult<PagedResult<Book>> {
        self.repo.list_books(filters).await
    }

    async fn remove(&self, id: BookId) -> ApiResult<()> {
        self.repo.delete_book(id).await
    }
}

/// Snapshot of the book list page, with category ids resolved to names.
pub fn book_page_data<S>(controller: &ListController<S>, categories: &[Category]) -> BookPageData
where
    S: ListSource<Item = Book, Id = BookId>,
{
    let filters = controller.filters();
    let result = controller.result();

    let rows = result
        .items
        .iter()
        .map(|book| BookRow {
            id: book.id.get(),
            name: book.name.clone(),
            price: book.price,
            category: category_name(categories, book.category_id).map(str::to_string),
            edit_url: controller.edit_route(book.id),
        })
        .collect();

    BookPageData {
        rows,
        keyword: filters.keyword().map(str::to_string),
        add_url: controller.add_route(),
        pagination: PaginationView::new(&result, &filters),
        dialog: DialogView::from_state(
            controller.dialog(),
            "Delete book",
            "Are you sure you want to delete this book?",
        ),
    }
}

/// Looks books up by name. A blank keyword lists the first page instead.
pub async fn search_books<R>(repo: &R, keyword: &str) -> ServiceResult<PagedResult<Book>>
where
    R: BookReader + ?Sized,
{
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Ok(repo.list_books(&FilterState::default()).await?);
    }
    Ok(repo.search_books(keyword).await?)
}

/// Loads the book shown on the edit page.
pub async fn load_book<R>(repo: &R, book_id: i32) -> ServiceResult<Book>
where
    R: BookReader + ?Sized,
{
    let book_id = BookId::new(book_id)?;
    Ok(repo.get_book_by_id(book_id).await?)
}

/// Validates the form and creates or replaces the book.
pub async fn save_book<R>(repo: &R, form: SaveBookForm, notifier: &Notifier) -> ServiceResult<Book>
where
    R: BookWriter + ?Sized,
{
    let payload = SaveBook::try_from(form)?;

    match repo.save_book(&payload).await {
        Ok(book) => {
            log::info!("Saved book {}", book.id);
            notifier.success(SAVE_SUCCESS);
            Ok(book)
        }
        Err(err) => {
            log::error!("Failed to save book {:?}: {err}", payload.id);
            notifier.error(SAVE_FAIL);
            Err(err.into())
        }
    }
}
