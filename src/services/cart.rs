//! Cart mutations for the authenticated user.
//!
//! Each mutation reloads [`CartContext`] afterwards so every view reading it
//! sees the new contents.

use crate::context::auth::AuthState;
use crate::context::cart::CartContext;
use crate::domain::cart::CartItem;
use crate::domain::types::{CartItemId, UserId};
use crate::dto::cart::{CartPageData, CartRow};
use crate::forms::cart::{AddToCartForm, UpdateCartForm};
use crate::repository::{CartReader, CartWriter};
use crate::services::{ServiceError, ServiceResult};

fn current_user(auth: &AuthState) -> ServiceResult<UserId> {
    auth.user_id().ok_or(ServiceError::Unauthorized)
}

async fn reload<R>(cart: &CartContext<R>)
where
    R: CartReader + Send + Sync + 'static,
{
    if let Err(err) = cart.update_cart().await {
        log::error!("Failed to reload cart: {err}");
    }
}

pub async fn add_to_cart<W, R>(
    repo: &W,
    auth: &AuthState,
    cart: &CartContext<R>,
    form: AddToCartForm,
) -> ServiceResult<CartItem>
where
    W: CartWriter + ?Sized,
    R: CartReader + Send + Sync + 'static,
{
    let user_id = current_user(auth)?;
    let item = form.into_domain(user_id)?;

    let added = repo.add_cart_item(&item).await?;
    log::info!("Added book {} to cart of user {user_id}", item.book_id);

    reload(cart).await;
    Ok(added)
}

pub async fn update_cart_item<W, R>(
    repo: &W,
    auth: &AuthState,
    cart: &CartContext<R>,
    form: UpdateCartForm,
) -> ServiceResult<CartItem>
where
    W: CartWriter + ?Sized,
    R: CartReader + Send + Sync + 'static,
{
    let user_id = current_user(auth)?;
    let item = form.into_domain(user_id)?;

    let updated = repo.update_cart_item(&item).await?;

    reload(cart).await;
    Ok(updated)
}

pub async fn remove_cart_item<W, R>(
    repo: &W,
    auth: &AuthState,
    cart: &CartContext<R>,
    item_id: i32,
) -> ServiceResult<()>
where
    W: CartWriter + ?Sized,
    R: CartReader + Send + Sync + 'static,
{
    current_user(auth)?;
    let item_id = CartItemId::new(item_id)?;

    repo.remove_cart_item(item_id).await?;
    log::info!("Removed cart entry {item_id}");

    reload(cart).await;
    Ok(())
}

/// Snapshot of the cart page. Prices are known only for entries that embed their book.
pub fn cart_page_data<R>(cart: &CartContext<R>) -> CartPageData
where
    R: CartReader + Send + Sync + 'static,
{
    let items = cart.cart_data();

    let rows: Vec<CartRow> = items
        .iter()
        .map(|item| CartRow {
            id: item.id.get(),
            book_id: item.book_id.get(),
            name: item.book.as_ref().map(|book| book.name.clone()),
            price: item.book.as_ref().map(|book| book.price),
            quantity: item.quantity,
        })
        .collect();

    let total_price = rows
        .iter()
        .filter_map(|row| row.price.map(|price| price * f64::from(row.quantity)))
        .sum();

    CartPageData {
        rows,
        item_count: cart.item_count(),
        total_price,
    }
}
