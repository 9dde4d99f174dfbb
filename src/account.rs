//! Account dialogs
//!
//! The account panel shows at most one dialog at a time. Picking a menu entry while a dialog
//! is open closes it instead of switching, so a second click dismisses.

/// Dialogs reachable from the account menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// Previous invoices.
    Invoices,

    /// Profile update form.
    Update,

    /// Account deletion confirmation.
    Delete,
}

/// Dialog selection state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dialogs {
    open: Option<DialogMode>,
}

impl Dialogs {
    /// The open dialog, if any.
    pub fn current(&self) -> Option<DialogMode> {
        self.open
    }

    /// Menu click: open `mode` when nothing is open, otherwise close what is open.
    pub fn select(&mut self, mode: DialogMode) -> Option<DialogMode> {
        self.open = match self.open {
            Some(_) => None,
            None => Some(mode),
        };

        self.open
    }

    /// Backdrop click or explicit cancel.
    pub fn close(&mut self) {
        self.open = None;
    }
}
