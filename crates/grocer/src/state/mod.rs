mod app_state;
mod modal;
mod modal_action;

pub use app_state::*;
pub use modal::*;
pub use modal_action::*;
