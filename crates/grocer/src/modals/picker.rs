use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use crate::state::PickerModal;
use crate::util::styles::selected_style;

use super::ModalResult;
use super::helpers::{HelpText, render_modal_frame};

const MODAL_WIDTH: u16 = 50;

/// Render the picker modal
pub fn render_picker_modal(frame: &mut Frame, modal: &PickerModal) {
    // Height follows the option count, scrolling past 14 rows
    let content_height = (modal.options.len() as u16).clamp(3, 14);
    let [_, options_area, _, help_area] = render_modal_frame(
        frame,
        &modal.title,
        (MODAL_WIDTH, content_height + 6),
        Color::Cyan,
        [
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ],
    );

    let items: Vec<ListItem> = modal
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let (prefix, style) = if idx == modal.selected_index {
                ("> ", selected_style())
            } else {
                ("  ", Style::default())
            };
            ListItem::new(Line::from(Span::styled(format!("{prefix}{option}"), style)))
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(modal.selected_index));
    frame.render_stateful_widget(List::new(items), options_area, &mut list_state);

    let help = HelpText::new()
        .key("[j/k]", Color::DarkGray, "Move")
        .key("[Enter]", Color::Green, "Select")
        .key("[Esc]", Color::Yellow, "Cancel")
        .build();
    frame.render_widget(help, help_area);
}

/// Handle key events for picker modal
pub fn handle_picker_key(key: KeyEvent, modal: &mut PickerModal) -> ModalResult {
    let len = modal.options.len();
    match key.code {
        KeyCode::Enter => match modal.options.get(modal.selected_index) {
            Some(selected) => ModalResult::Confirmed(modal.action, selected.clone()),
            None => ModalResult::Cancelled,
        },
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Char('j') | KeyCode::Down => {
            if len > 0 {
                modal.selected_index = (modal.selected_index + 1) % len;
            }
            ModalResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if len > 0 {
                modal.selected_index = (modal.selected_index + len - 1) % len;
            }
            ModalResult::Continue
        }
        KeyCode::Home => {
            modal.selected_index = 0;
            ModalResult::Continue
        }
        KeyCode::End => {
            modal.selected_index = len.saturating_sub(1);
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}
