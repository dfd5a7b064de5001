//! Dialog-based form state.
//!
//! One mutable form per open create/edit dialog; the page controllers in
//! `crate::pages` own the dialog state machine and drive these forms.
//! Validation returns the first problem as a single human-readable message
//! (the dialogs show exactly one inline error at a time).

pub mod meeting;
pub mod visit;

pub use meeting::{ExternalParticipantInput, MeetingForm};
pub use visit::{ExternalVisitorInput, VisitForm};

/// How a dialog was opened. Complete is the shortcut that only exposes the
/// end-timestamp field and otherwise carries the record forward unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(i64),
    Complete(i64),
}

/// Per-dialog lifecycle: Closed -> Open -> Submitting -> Closed on success,
/// back to Open (with an error set) on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open(DialogMode),
    Submitting(DialogMode),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn mode(&self) -> Option<DialogMode> {
        match self {
            DialogState::Closed => None,
            DialogState::Open(mode) | DialogState::Submitting(mode) => Some(*mode),
        }
    }
}

/// First-error validator for a required text field.
pub(crate) fn require_text(value: &str, message: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(message.to_string())
    } else {
        None
    }
}
