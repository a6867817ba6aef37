// Actions module - handlers for confirmed modals
//
// Each handler turns a confirmed modal value into calls on the list manager
// and says which modal, if any, comes next.

mod entry;
mod list;

pub use entry::*;
pub use list::*;

use crate::state::{AppState, ModalState};

/// Result of an action handler
#[derive(Debug)]
pub enum ActionResult {
    /// Action completed, set modal to this state (None closes the modal)
    Done(Option<ModalState>),
    /// Action failed with an error message
    Error(String),
}

impl ActionResult {
    /// Create a result that closes the modal
    pub fn close() -> Self {
        ActionResult::Done(None)
    }

    /// Create a result that shows a new modal
    pub fn modal(state: ModalState) -> Self {
        ActionResult::Done(Some(state))
    }

    /// Create an error result
    pub fn error(msg: impl Into<String>) -> Self {
        ActionResult::Error(msg.into())
    }

    /// Install the outcome on `state`
    pub fn apply(self, state: &mut AppState) {
        match self {
            ActionResult::Done(next) => {
                state.modal = next.unwrap_or(ModalState::None);
            }
            ActionResult::Error(msg) => {
                state.modal = ModalState::None;
                state.set_error(msg);
            }
        }
        state.clamp_selection();
    }
}
