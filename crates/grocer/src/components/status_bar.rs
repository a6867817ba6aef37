use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, SELECTED_COLOR};
use crossterm::event::KeyEvent;
use grocer_core::View;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> &'static str {
        match state.manager.view() {
            View::Lists => {
                "j/k: nav | Enter: open | n: new | c: copy | d: delete | Ctrl+S: save | q: quit"
            }
            View::Items => {
                "j/k: nav | Space: toggle | a or /: add | i: quick add | Esc: back | Ctrl+S: save | q: quit"
            }
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = if let Some(error) = &state.error_message {
            vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.clone()),
            ]
        } else {
            vec![Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            )]
        };

        if state.has_unsaved_changes() {
            spans.push(Span::styled(
                "  [modified]",
                Style::default().fg(SELECTED_COLOR),
            ));
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
