use tokio::sync::watch;

use crate::domain::types::UserId;

/// Authenticated user id, observable by session-scoped state.
///
/// Observers are only woken when the id actually changes.
#[derive(Clone, Debug)]
pub struct AuthState {
    sender: watch::Sender<Option<UserId>>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AuthState {
    pub fn new(user_id: Option<UserId>) -> Self {
        let (sender, _) = watch::channel(user_id);
        Self { sender }
    }

    pub fn user_id(&self) -> Option<UserId> {
        *self.sender.borrow()
    }

    pub fn login(&self, user_id: UserId) {
        self.set(Some(user_id));
    }

    pub fn logout(&self) {
        self.set(None);
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<UserId>> {
        self.sender.subscribe()
    }

    fn set(&self, user_id: Option<UserId>) {
        let changed = self.sender.send_if_modified(|current| {
            if *current == user_id {
                return false;
            }
            *current = user_id;
            true
        });
        if changed {
            log::info!("Authenticated user changed to {user_id:?}");
        }
    }
}
