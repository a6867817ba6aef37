pub mod header;
pub mod status_bar;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::state::AppState;

/// What a component did with a key press
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    Handled,
    /// Let the caller try the key
    NotHandled,
    Exit,
}

/// A piece of the screen that draws from `AppState` and may react to keys
pub trait Component {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
