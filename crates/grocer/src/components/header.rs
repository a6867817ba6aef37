use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, header_style};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Title line: the lists heading, or a back hint plus the open list's name
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    fn title(state: &AppState) -> Line<'static> {
        match state.manager.current_list().filter(|_| state.in_items_view()) {
            Some(list) => Line::from(vec![
                Span::styled("← Back to Lists", Style::default().fg(HELP_COLOR)),
                Span::raw("   "),
                Span::styled(list.name.clone(), header_style()),
            ]),
            None => Line::from(Span::styled("My Shopping Lists", header_style())),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Header {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let paragraph =
            Paragraph::new(Self::title(state)).block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(paragraph, area);
    }
}
