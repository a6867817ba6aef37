use crate::actions::{self, ActionResult};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{ACTION_COLOR, HELP_COLOR, selected_style, titled_block};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use super::Screen;

/// Every shopping list with its progress
pub struct ListsScreen;

impl ListsScreen {
    pub fn new() -> Self {
        Self
    }

    fn open_selected(state: &mut AppState) {
        let Some(id) = state.selected_list_id() else {
            return;
        };
        if let Err(e) = state.manager.select_list(id) {
            state.set_error(e.to_string());
            return;
        }
        state.items_state.selected_index = 0;
    }
}

impl Default for ListsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ListsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let count = state.manager.lists().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if count > 0 {
                    state.lists_state.selected_index =
                        (state.lists_state.selected_index + 1) % count;
                }
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if count > 0 {
                    state.lists_state.selected_index =
                        (state.lists_state.selected_index + count - 1) % count;
                }
                EventResult::Handled
            }
            KeyCode::Enter => {
                Self::open_selected(state);
                EventResult::Handled
            }
            KeyCode::Char('n') => {
                actions::handle_create_list(state).apply(state);
                EventResult::Handled
            }
            KeyCode::Char('c') => {
                if let Some(id) = state.selected_list_id() {
                    actions::handle_duplicate_list(state, id).apply(state);
                }
                EventResult::Handled
            }
            KeyCode::Char('d') => {
                let modal = state
                    .selected_list_id()
                    .and_then(|id| actions::confirm_delete_list(state, id));
                if let Some(modal) = modal {
                    ActionResult::modal(modal).apply(state);
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lists = state.manager.lists();
        let mut items: Vec<ListItem> = lists
            .iter()
            .enumerate()
            .map(|(idx, list)| {
                let summary = format!(
                    "  {} of {} done",
                    list.completed_count(),
                    list.item_count()
                );
                let (prefix, style) = if idx == state.lists_state.selected_index {
                    ("> ", selected_style())
                } else {
                    ("  ", Style::default())
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{prefix}{}", list.name), style),
                    Span::styled(summary, Style::default().fg(HELP_COLOR)),
                ]))
            })
            .collect();

        if lists.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                "  (no lists yet)",
                Style::default().fg(HELP_COLOR),
            ))));
        }
        items.push(ListItem::new(Line::from(Span::styled(
            "  + Create New List [n]",
            Style::default()
                .fg(ACTION_COLOR)
                .add_modifier(Modifier::BOLD),
        ))));

        let mut list_state = ListState::default().with_selected(
            (!lists.is_empty()).then_some(state.lists_state.selected_index),
        );
        let list = List::new(items).block(titled_block(self.title()));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

impl Screen for ListsScreen {
    fn title(&self) -> &str {
        "Lists"
    }
}
