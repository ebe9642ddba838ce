//! DTO modules that bridge services with templates.

use std::fmt::Display;

use serde::Serialize;

use crate::controller::dialog::DialogState;

pub mod book;
pub mod cart;
pub mod category;

/// Confirmation dialog as shown on a list page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DialogView {
    pub title: String,
    pub description: String,
    /// Record the dialog is asking about.
    pub target: String,
    /// The confirmed action is running.
    pub busy: bool,
}

impl DialogView {
    /// Dialog for `state`, or `None` while it is closed.
    pub fn from_state<Id: Display>(
        state: DialogState<Id>,
        title: &str,
        description: &str,
    ) -> Option<Self> {
        let (target, busy) = match state {
            DialogState::Closed => return None,
            DialogState::Open { target } => (target, false),
            DialogState::Confirming { target } => (target, true),
        };
        Some(Self {
            title: title.to_string(),
            description: description.to_string(),
            target: target.to_string(),
            busy,
        })
    }
}
