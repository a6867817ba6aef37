use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::Color,
    widgets::{Paragraph, Wrap},
};

use crate::state::MessageModal;

use super::ModalResult;
use super::helpers::{HelpText, render_modal_frame};

const WIDTH: u16 = 50;

/// Rows needed for `message` once wrapped inside the border
fn wrapped_rows(message: &str) -> u16 {
    let usable = (WIDTH - 4) as usize;
    message
        .lines()
        .map(|line| line.chars().count().div_ceil(usable).max(1))
        .sum::<usize>()
        .max(1) as u16
}

/// Save results and other notices; errors get a red border
pub fn render_message_modal(frame: &mut Frame, modal: &MessageModal) {
    let border = if modal.is_error {
        Color::Red
    } else {
        Color::Green
    };
    let height = (wrapped_rows(&modal.message) + 5).min(frame.area().height);

    let [_, body, help] = render_modal_frame(
        frame,
        &modal.title,
        (WIDTH, height),
        border,
        [
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ],
    );

    frame.render_widget(
        Paragraph::new(modal.message.as_str()).wrap(Wrap { trim: true }),
        body,
    );
    frame.render_widget(
        HelpText::new().key("[Enter/Esc]", Color::Green, "OK").build(),
        help,
    );
}

pub fn handle_message_key(key: KeyEvent) -> ModalResult {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => ModalResult::Cancelled,
        _ => ModalResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows(""), 1);
        assert_eq!(wrapped_rows("Saved 2 list(s)"), 1);
        assert_eq!(wrapped_rows(&"x".repeat(47)), 2);
        assert_eq!(wrapped_rows("one\ntwo"), 2);
    }
}
