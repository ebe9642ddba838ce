//! Cart contents for the current session.
//!
//! [`CartContext`] is the single writer of the cart list. It reloads on its
//! own only when the authenticated user changes; after adding, updating or
//! removing items callers run [`CartContext::update_cart`] themselves.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tokio::task::JoinHandle;

use crate::context::auth::AuthState;
use crate::domain::cart::CartItem;
use crate::repository::CartReader;
use crate::repository::errors::ApiResult;

struct Inner<R> {
    repo: R,
    auth: AuthState,
    items: RwLock<Vec<CartItem>>,
    issued: AtomicU64,
}

pub struct CartContext<R> {
    inner: Arc<Inner<R>>,
}

impl<R> Clone for CartContext<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> CartContext<R>
where
    R: CartReader + Send + Sync + 'static,
{
    pub fn new(repo: R, auth: AuthState) -> Self {
        Self {
            inner: Arc::new(Inner {
                repo,
                auth,
                items: RwLock::new(Vec::new()),
                issued: AtomicU64::new(0),
            }),
        }
    }

    /// Reloads the cart of the authenticated user.
    ///
    /// Without a user nothing is fetched and the stored list is kept. A
    /// response is dropped when a newer reload was issued in the meantime.
    pub async fn update_cart(&self) -> ApiResult<()> {
        let Some(user_id) = self.inner.auth.user_id() else {
            return Ok(());
        };
        let sequence = self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let items = self.inner.repo.list_cart(user_id).await?;

        let mut stored = self.inner.items.write();
        if self.inner.issued.load(Ordering::SeqCst) != sequence {
            log::debug!("Discarding stale cart response #{sequence}");
            return Ok(());
        }
        *stored = items;
        Ok(())
    }

    pub fn empty_cart(&self) {
        self.inner.items.write().clear();
    }

    pub fn cart_data(&self) -> Vec<CartItem> {
        self.inner.items.read().clone()
    }

    /// Total number of copies across all entries.
    pub fn item_count(&self) -> u32 {
        self.inner.items.read().iter().map(|item| item.quantity).sum()
    }

    /// Loads the cart now and again every time the user id changes.
    pub fn mount(&self) -> JoinHandle<()> {
        let context = self.clone();
        let mut changes = self.inner.auth.subscribe();
        tokio::spawn(async move {
            loop {
                if let Err(err) = context.update_cart().await {
                    log::error!("Failed to load cart: {err}");
                }
                if changes.changed().await.is_err() {
                    break;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::*;
    use crate::domain::types::{BookId, CartItemId, UserId};
    use crate::repository::errors::ApiError;
    use crate::repository::mock::MockRepository;

    fn item(id: i32, user: i32, quantity: u32) -> CartItem {
        CartItem {
            id: CartItemId::new(id).unwrap(),
            user_id: UserId::new(user).unwrap(),
            book_id: BookId::new(id * 10).unwrap(),
            quantity,
            book: None,
        }
    }

    #[tokio::test]
    async fn update_without_user_does_not_fetch() {
        let mut repo = MockRepository::new();
        repo.expect_list_cart().times(0);
        let context = CartContext::new(repo, AuthState::default());

        context.update_cart().await.unwrap();

        assert!(context.cart_data().is_empty());
    }

    #[tokio::test]
    async fn logout_keeps_previous_list_until_emptied() {
        let mut repo = MockRepository::new();
        repo.expect_list_cart()
            .times(1)
            .returning(|user| Ok(vec![item(1, user.get(), 2)]));
        let auth = AuthState::new(Some(UserId::new(3).unwrap()));
        let context = CartContext::new(repo, auth.clone());

        context.update_cart().await.unwrap();
        auth.logout();
        context.update_cart().await.unwrap();
        assert_eq!(context.cart_data().len(), 1);

        context.empty_cart();
        assert!(context.cart_data().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_list_wholesale() {
        let mut repo = MockRepository::new();
        let mut responses = VecDeque::from([
            vec![item(1, 3, 1), item(2, 3, 4)],
            vec![item(5, 3, 2)],
        ]);
        repo.expect_list_cart()
            .withf(|user| user.get() == 3)
            .times(2)
            .returning(move |_| Ok(responses.pop_front().unwrap_or_default()));
        let context = CartContext::new(repo, AuthState::new(Some(UserId::new(3).unwrap())));

        context.update_cart().await.unwrap();
        assert_eq!(context.item_count(), 5);

        context.update_cart().await.unwrap();
        assert_eq!(context.cart_data(), vec![item(5, 3, 2)]);
    }

    #[tokio::test]
    async fn failed_update_keeps_list() {
        let mut repo = MockRepository::new();
        let mut first = true;
        repo.expect_list_cart().times(2).returning(move |_| {
            if std::mem::take(&mut first) {
                Ok(vec![item(1, 3, 1)])
            } else {
                Err(ApiError::Network("timeout".to_string()))
            }
        });
        let context = CartContext::new(repo, AuthState::new(Some(UserId::new(3).unwrap())));

        context.update_cart().await.unwrap();
        assert!(context.update_cart().await.is_err());

        assert_eq!(context.cart_data(), vec![item(1, 3, 1)]);
    }

    #[tokio::test(start_paused = true)]
    async fn mount_reloads_when_user_changes() {
        let mut repo = MockRepository::new();
        repo.expect_list_cart()
            .times(2)
            .returning(|user| Ok(vec![item(user.get(), user.get(), 1)]));
        let auth = AuthState::new(Some(UserId::new(1).unwrap()));
        let context = CartContext::new(repo, auth.clone());

        let watcher = context.mount();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(context.cart_data(), vec![item(1, 1, 1)]);

        auth.login(UserId::new(1).unwrap());
        auth.login(UserId::new(2).unwrap());
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(context.cart_data(), vec![item(2, 2, 1)]);

        watcher.abort();
    }

    /// Serves queued responses, each after its own delay.
    struct SlowCart {
        responses: Mutex<VecDeque<(Duration, Vec<CartItem>)>>,
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl CartReader for SlowCart {
        async fn list_cart(&self, _user_id: UserId) -> ApiResult<Vec<CartItem>> {
            *self.calls.lock() += 1;
            let next = self.responses.lock().pop_front();
            let (delay, items) = next.unwrap_or_default();
            tokio::time::sleep(delay).await;
            Ok(items)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn later_request_wins_when_earlier_resolves_last() {
        let repo = SlowCart {
            responses: Mutex::new(VecDeque::from([
                (Duration::from_millis(200), vec![item(1, 3, 1)]),
                (Duration::from_millis(50), vec![item(2, 3, 1)]),
            ])),
            calls: Mutex::new(0),
        };
        let context = CartContext::new(repo, AuthState::new(Some(UserId::new(3).unwrap())));

        let first = tokio::spawn({
            let context = context.clone();
            async move { context.update_cart().await }
        });
        while *context.inner.repo.calls.lock() == 0 {
            tokio::task::yield_now().await;
        }
        let second = tokio::spawn({
            let context = context.clone();
            async move { context.update_cart().await }
        });

        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        assert_eq!(context.cart_data(), vec![item(2, 3, 1)]);
    }
}
