use crate::actions;
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, completed_style, header_style, selected_style, titled_block};
use crossterm::event::{KeyCode, KeyEvent};
use grocer_core::group_by_category;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::Screen;

const ENTRY_PLACEHOLDER: &str = "Search or add new item...";

/// Items of the current list, grouped by category
pub struct ItemsScreen;

impl ItemsScreen {
    pub fn new() -> Self {
        Self
    }

    fn toggle_selected(state: &mut AppState) {
        let (Some(list), Some(item)) = (state.manager.current_list_id(), state.selected_item_id())
        else {
            return;
        };
        if let Err(e) = state.manager.toggle_item(list, item) {
            state.set_error(e.to_string());
        }
    }

    fn render_entry_box(frame: &mut Frame, area: Rect, state: &AppState) {
        let text = state.manager.search_text();
        let line = if text.is_empty() {
            Line::from(Span::styled(ENTRY_PLACEHOLDER, Style::default().fg(HELP_COLOR)))
        } else {
            Line::from(text.to_string())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(HELP_COLOR));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

impl Default for ItemsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ItemsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let count = state
            .manager
            .current_list()
            .map(|list| list.items.len())
            .unwrap_or(0);

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if count > 0 {
                    state.items_state.selected_index =
                        (state.items_state.selected_index + 1) % count;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if count > 0 {
                    state.items_state.selected_index =
                        (state.items_state.selected_index + count - 1) % count;
                }
                EventResult::Handled
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                Self::toggle_selected(state);
                EventResult::Handled
            }
            KeyCode::Char('/') | KeyCode::Char('a') => {
                state.modal = actions::open_entry(state);
                EventResult::Handled
            }
            KeyCode::Char('i') => {
                actions::handle_toggle_quick_add(state).apply(state);
                EventResult::Handled
            }
            KeyCode::Esc | KeyCode::Backspace => {
                state.manager.back();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        Self::render_entry_box(frame, chunks[0], state);

        let Some(list) = state.manager.current_list() else {
            return;
        };

        let mut rows: Vec<ListItem> = Vec::new();
        let mut highlighted = None;
        let mut position = 0;

        for (category, items) in group_by_category(&list.items) {
            rows.push(ListItem::new(Line::from(Span::styled(
                category.name(),
                header_style(),
            ))));
            for item in items {
                let is_selected = position == state.items_state.selected_index;
                if is_selected {
                    highlighted = Some(rows.len());
                }
                let checkbox = if item.completed { "[x]" } else { "[ ]" };
                let name_style = match (is_selected, item.completed) {
                    (true, true) => completed_style().patch(selected_style()),
                    (true, false) => selected_style(),
                    (false, true) => completed_style(),
                    (false, false) => Style::default(),
                };
                rows.push(ListItem::new(Line::from(vec![
                    Span::raw(format!("  {checkbox} ")),
                    Span::styled(item.name.clone(), name_style),
                ])));
                position += 1;
            }
        }

        if rows.is_empty() {
            rows.push(ListItem::new(Line::from(Span::styled(
                "No items yet. Press [a] to add one or [i] for quick add.",
                Style::default().fg(HELP_COLOR),
            ))));
        }

        let title = format!(
            "{} ({} of {} done)",
            self.title(),
            list.completed_count(),
            list.item_count()
        );
        let mut list_state = ListState::default().with_selected(highlighted);
        frame.render_stateful_widget(
            List::new(rows).block(titled_block(&title)),
            chunks[1],
            &mut list_state,
        );
    }
}

impl Screen for ItemsScreen {
    fn title(&self) -> &str {
        "Items"
    }
}
