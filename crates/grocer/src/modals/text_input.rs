use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::TextInputModal;
use crate::util::styles::HELP_COLOR;

use super::ModalResult;
use super::helpers::{HelpText, calculate_scroll, render_cursor_line, render_modal_frame};

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 10;

/// Render the text input modal
pub fn render_text_input_modal(frame: &mut Frame, modal: &TextInputModal) {
    let [_, prompt_area, input_area, _, help_area] = render_modal_frame(
        frame,
        &modal.title,
        (MODAL_WIDTH, MODAL_HEIGHT),
        Color::Cyan,
        [
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ],
    );

    let prompt = Paragraph::new(Line::from(Span::styled(
        &modal.prompt,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(prompt, prompt_area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let input_inner = input_block.inner(input_area);
    frame.render_widget(input_block, input_area);

    let input_line = if modal.value.is_empty() && !modal.placeholder.is_empty() {
        Line::from(vec![
            Span::styled(" ", Style::default().bg(Color::White)),
            Span::styled(modal.placeholder.clone(), Style::default().fg(HELP_COLOR)),
        ])
    } else {
        let scrolled = calculate_scroll(&modal.value, modal.cursor_pos, input_inner.width as usize);
        render_cursor_line(&scrolled.display_value, scrolled.cursor_pos, "")
    };
    frame.render_widget(Paragraph::new(input_line), input_inner);

    let help = HelpText::new()
        .key("[Enter]", Color::Green, "Add")
        .key("[Esc]", Color::Yellow, "Cancel")
        .build();
    frame.render_widget(help, help_area);
}

/// Handle key events for text input modal
pub fn handle_text_input_key(key: KeyEvent, modal: &mut TextInputModal) -> ModalResult {
    match key.code {
        KeyCode::Enter => ModalResult::Confirmed(modal.action, modal.value.clone()),
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Backspace => {
            modal.backspace();
            ModalResult::Continue
        }
        KeyCode::Delete => {
            modal.delete();
            ModalResult::Continue
        }
        KeyCode::Left => {
            modal.move_cursor_left();
            ModalResult::Continue
        }
        KeyCode::Right => {
            modal.move_cursor_right();
            ModalResult::Continue
        }
        KeyCode::Home => {
            modal.move_cursor_home();
            ModalResult::Continue
        }
        KeyCode::End => {
            modal.move_cursor_end();
            ModalResult::Continue
        }
        KeyCode::Char(c) => {
            modal.insert_char(c);
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalAction;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_then_enter_confirms_value() {
        let mut modal = TextInputModal::new("Add Item", "", "", ModalAction::SUBMIT_ENTRY);
        for c in "Tea".chars() {
            assert_eq!(
                handle_text_input_key(press(KeyCode::Char(c)), &mut modal),
                ModalResult::Continue
            );
        }
        assert_eq!(
            handle_text_input_key(press(KeyCode::Enter), &mut modal),
            ModalResult::Confirmed(ModalAction::SUBMIT_ENTRY, "Tea".to_string())
        );
    }

    #[test]
    fn test_escape_cancels() {
        let mut modal = TextInputModal::new("Add Item", "", "Soap", ModalAction::SUBMIT_ENTRY);
        assert_eq!(
            handle_text_input_key(press(KeyCode::Esc), &mut modal),
            ModalResult::Cancelled
        );
        assert_eq!(modal.value, "Soap");
    }

    #[test]
    fn test_editing_keys() {
        let mut modal = TextInputModal::new("Add Item", "", "Beef", ModalAction::SUBMIT_ENTRY);
        handle_text_input_key(press(KeyCode::Backspace), &mut modal);
        handle_text_input_key(press(KeyCode::Home), &mut modal);
        handle_text_input_key(press(KeyCode::Delete), &mut modal);
        assert_eq!(modal.value, "ee");
    }
}
