use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Wrap},
};

use crate::state::ConfirmModal;

use super::ModalResult;
use super::helpers::{HelpText, render_modal_frame};

const SIZE: (u16, u16) = (56, 8);

/// Yes/no prompt for destructive actions, drawn with a red border
pub fn render_confirm_modal(frame: &mut Frame, modal: &ConfirmModal) {
    let [_, body, help] = render_modal_frame(
        frame,
        &modal.title,
        SIZE,
        Color::Red,
        [
            Constraint::Length(1),
            Constraint::Min(2),
            Constraint::Length(1),
        ],
    );

    frame.render_widget(
        Paragraph::new(modal.message.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true }),
        body,
    );
    frame.render_widget(
        HelpText::new()
            .key("[y]", Color::Red, "Delete")
            .key("[n/Esc]", Color::Green, "Keep")
            .build(),
        help,
    );
}

/// Only an explicit `y` confirms; anything else but `n`/Esc is ignored
pub fn handle_confirm_key(key: KeyEvent, modal: &ConfirmModal) -> ModalResult {
    match key.code {
        KeyCode::Char('y' | 'Y') => ModalResult::Confirmed(modal.action, String::new()),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => ModalResult::Cancelled,
        _ => ModalResult::Continue,
    }
}
