//! Yes/no gate in front of destructive actions.

/// Presentation state of the confirmation dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DialogState<Id> {
    #[default]
    Closed,
    /// Waiting for the user to confirm or cancel.
    Open { target: Id },
    /// Confirmed; the action is running.
    Confirming { target: Id },
}

/// A destructive action can only obtain its target through
/// [`ConfirmationDialog::begin_confirm`], which requires the dialog to have
/// been opened first.
#[derive(Clone, Debug, Default)]
pub struct ConfirmationDialog<Id> {
    state: DialogState<Id>,
}

impl<Id: Copy> ConfirmationDialog<Id> {
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
        }
    }

    pub fn state(&self) -> DialogState<Id> {
        self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DialogState::Closed)
    }

    /// Held target, if any.
    pub fn target(&self) -> Option<Id> {
        match self.state {
            DialogState::Closed => None,
            DialogState::Open { target } | DialogState::Confirming { target } => Some(target),
        }
    }

    /// Opens the dialog for `target`. Refused while an action is running.
    pub fn open(&mut self, target: Id) -> bool {
        if matches!(self.state, DialogState::Confirming { .. }) {
            return false;
        }
        self.state = DialogState::Open { target };
        true
    }

    /// Closes the dialog and discards the target. Ignored while confirming.
    pub fn cancel(&mut self) {
        if let DialogState::Open { .. } = self.state {
            self.state = DialogState::Closed;
        }
    }

    pub fn begin_confirm(&mut self) -> Option<Id> {
        match self.state {
            DialogState::Open { target } => {
                self.state = DialogState::Confirming { target };
                Some(target)
            }
            _ => None,
        }
    }

    /// Finishes a running action: success closes, failure reopens on the same target.
    pub fn resolve(&mut self, success: bool) {
        if let DialogState::Confirming { target } = self.state {
            self.state = if success {
                DialogState::Closed
            } else {
                DialogState::Open { target }
            };
        }
    }
}
