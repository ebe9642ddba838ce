//! Toast-style notifications raised by the presentation layer.

use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub const DELETE_SUCCESS: &str = "Record deleted successfully";
pub const DELETE_FAIL: &str = "Failed to delete record";
pub const SAVE_SUCCESS: &str = "Record saved successfully";
pub const SAVE_FAIL: &str = "Failed to save record";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Level {
    Success,
    Error,
    Warning,
    Info,
}

impl Level {
    /// Alert class used when the notification is rendered.
    pub fn as_css(self) -> &'static str {
        match self {
            Level::Error => "danger",
            Level::Warning => "warning",
            Level::Success => "success",
            Level::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

/// Sending half of the notification channel.
#[derive(Clone, Debug)]
pub struct Notifier {
    sender: UnboundedSender<Notification>,
}

impl Notifier {
    pub fn channel() -> (Self, UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn success(&self, message: impl Into<String>) {
        self.send(Level::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.send(Level::Error, message.into());
    }

    fn send(&self, level: Level, message: String) {
        if self.sender.send(Notification { level, message }).is_err() {
            log::warn!("Notification dropped: no receiver");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_maps_to_alert_class() {
        assert_eq!(Level::Error.as_css(), "danger");
        assert_eq!(Level::Warning.as_css(), "warning");
        assert_eq!(Level::Success.as_css(), "success");
        assert_eq!(Level::Info.as_css(), "info");
    }

    #[test]
    fn notifications_arrive_in_order() {
        let (notifier, mut receiver) = Notifier::channel();
        notifier.success(DELETE_SUCCESS);
        notifier.error(DELETE_FAIL);

        assert_eq!(receiver.try_recv().unwrap().level, Level::Success);
        assert_eq!(
            receiver.try_recv().unwrap(),
            Notification {
                level: Level::Error,
                message: DELETE_FAIL.to_string()
            }
        );
    }

    #[test]
    fn dropped_receiver_is_not_an_error() {
        let (notifier, receiver) = Notifier::channel();
        drop(receiver);

        notifier.error("nobody listens");
    }
}
