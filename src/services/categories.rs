//! Services behind the category list and the add/edit category pages.

use std::sync::Arc;

use async_trait::async_trait;

use crate::controller::{ListController, ListSource};
use crate::domain::category::{Category, SaveCategory};
use crate::domain::filter::FilterState;
use crate::domain::types::CategoryId;
use crate::dto::DialogView;
use crate::dto::category::{CategoryPageData, CategoryRow};
use crate::forms::category::SaveCategoryForm;
use crate::notifications::{Notifier, SAVE_FAIL, SAVE_SUCCESS};
use crate::pagination::{PagedResult, PaginationView};
use crate::repository::errors::ApiResult;
use crate::repository::{CategoryReader, CategoryWriter, category};
use crate::services::ServiceResult;

pub struct CategoryList<R> {
    repo: Arc<R>,
}

impl<R> CategoryList<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListSource for CategoryList<R>
where
    R: CategoryReader + CategoryWriter + Send + Sync + 'static,
{
    type Item = Category;
    type Id = CategoryId;

    const RESOURCE: &'static str = category::ENDPOINT;

    async fn fetch(&self, filters: &FilterState) -> ApiResult<PagedResult<Category>> {
        self.repo.list_categories(filters).await
    }

    async fn remove(&self, id: CategoryId) -> ApiResult<()> {
        self.repo.delete_category(id).await
    }
}

pub fn category_page_data<S>(controller: &ListController<S>) -> CategoryPageData
where
    S: ListSource<Item = Category, Id = CategoryId>,
{
    let filters = controller.filters();
    let result = controller.result();

    let rows = result
        .items
        .iter()
        .map(|category| CategoryRow {
            id: category.id.get(),
            name: category.name.clone(),
            edit_url: controller.edit_route(category.id),
        })
        .collect();

    CategoryPageData {
        rows,
        keyword: filters.keyword().map(str::to_string),
        add_url: controller.add_route(),
        pagination: PaginationView::new(&result, &filters),
        dialog: DialogView::from_state(
            controller.dialog(),
            "Delete category",
            "Are you sure you want to delete this category?",
        ),
    }
}

/// Full category set used to resolve names and fill selectors.
pub async fn load_all_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    Ok(repo.list_all_categories().await?)
}

pub async fn load_category<R>(repo: &R, category_id: i32) -> ServiceResult<Category>
where
    R: CategoryReader + ?Sized,
{
    let category_id = CategoryId::new(category_id)?;
    Ok(repo.get_category_by_id(category_id).await?)
}

/// Validates the form and creates or renames the category.
pub async fn save_category<R>(
    repo: &R,
    form: SaveCategoryForm,
    notifier: &Notifier,
) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let payload = SaveCategory::try_from(form)?;

    match repo.save_category(&payload).await {
        Ok(category) => {
            log::info!("Saved category {}", category.id);
            notifier.success(SAVE_SUCCESS);
            Ok(category)
        }
        Err(err) => {
            log::error!("Failed to save category {:?}: {err}", payload.id);
            notifier.error(SAVE_FAIL);
            Err(err.into())
        }
    }
}
