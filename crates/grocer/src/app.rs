use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use grocer_core::{CatalogMatch, Lookups, View};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::actions::{self, ActionResult};
use crate::components::{Component, EventResult, header::Header, status_bar::StatusBar};
use crate::data::settings::Settings;
use crate::data::storage;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::{items::ItemsScreen, lists::ListsScreen};
use crate::state::{AppState, EntryAction, ListAction, MessageModal, ModalAction, ModalState};

/// Command-line switches layered over `config.yaml`
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub strict: bool,
    pub ignore_case: bool,
}

impl Overrides {
    fn apply(self, settings: &mut Settings) {
        if self.strict {
            settings.lookups = Lookups::Strict;
        }
        if self.ignore_case {
            settings.catalog_match = CatalogMatch::IgnoreCase;
        }
    }
}

pub struct App {
    state: AppState,
    header: Header,
    status_bar: StatusBar,
    lists_screen: ListsScreen,
    items_screen: ItemsScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::from_state(AppState::default())
    }

    /// Create app with a data directory path
    pub fn with_data_dir(data_dir: PathBuf, overrides: Overrides) -> Self {
        let mut state = match AppState::load_from_data_dir(data_dir.clone()) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Failed to load from {}: {e}", data_dir.display());
                eprintln!("Warning: Failed to load from {:?}: {}", data_dir, e);
                eprintln!("Starting with sample lists.");
                let mut state = AppState::default();
                state.data_dir = Some(data_dir);
                state
            }
        };

        overrides.apply(&mut state.settings);
        let options = state.settings.manager_options();
        state.manager.set_options(options);

        Self::from_state(state)
    }

    fn from_state(state: AppState) -> Self {
        Self {
            state,
            header: Header::new(),
            status_bar: StatusBar::new(),
            lists_screen: ListsScreen::new(),
            items_screen: ItemsScreen::new(),
        }
    }

    /// Replace all lists with a JSON snapshot
    pub fn import_json(&mut self, path: &Path) -> color_eyre::Result<()> {
        let snapshot = storage::import_json(path)?;
        self.state.manager.restore(snapshot)?;
        self.state.lists_state.selected_index = 0;
        self.state.items_state.selected_index = 0;
        self.state.mark_modified();
        tracing::info!(
            lists = self.state.manager.lists().len(),
            "Imported lists from {}",
            path.display()
        );
        Ok(())
    }

    /// Write all lists to a JSON snapshot
    pub fn export_json(&self, path: &Path) -> color_eyre::Result<()> {
        storage::export_json(path, &self.state.manager.snapshot())?;
        Ok(())
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        if self.state.has_unsaved_changes() {
            if self.state.settings.autosave {
                if let Err(e) = self.state.save() {
                    tracing::error!("Autosave failed: {e}");
                    eprintln!("Autosave failed: {e}");
                }
            } else {
                tracing::warn!("Exiting with unsaved changes");
                eprintln!("Exiting with unsaved changes (save with Ctrl+S or enable autosave)");
            }
        }

        Ok(())
    }

    fn save_all(&mut self) {
        self.state.modal = match self.state.save() {
            Ok(()) => ModalState::Message(MessageModal::info(
                "Saved",
                &format!("Saved {} list(s)", self.state.manager.lists().len()),
            )),
            Err(e) => {
                tracing::error!("Failed to save: {e}");
                ModalState::Message(MessageModal::error("Save Failed", &e.to_string()))
            }
        };
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.header.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);

        // Render modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.manager.view() {
            View::Lists => self.lists_screen.render(frame, area, &self.state),
            View::Items => self.items_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if self.state.modal.is_open() {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action, value) => {
                    self.handle_modal_result(action, value);
                }
                ModalResult::Cancelled => {
                    let action = self.state.modal.action();
                    actions::handle_cancel(&mut self.state, action);
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => self.sync_entry_text(),
            }
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('s') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.save_all();
                return;
            }
            // Esc clears a pending error before it navigates back
            KeyCode::Esc if self.state.error_message.is_some() => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = match self.state.manager.view() {
            View::Lists => self.lists_screen.handle_key(key_event, &mut self.state),
            View::Items => self.items_screen.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }

    /// Mirror the entry modal's text into the manager's search box
    fn sync_entry_text(&mut self) {
        let value = match &self.state.modal {
            ModalState::TextInput(input) if input.action == ModalAction::SUBMIT_ENTRY => {
                input.value.clone()
            }
            _ => return,
        };
        self.state.manager.set_search_text(value);
    }

    fn handle_modal_result(&mut self, action: ModalAction, value: String) {
        let target = match &self.state.modal {
            ModalState::Confirm(confirm) => confirm.target,
            _ => None,
        };

        let result = match action {
            ModalAction::List(ListAction::Delete) => {
                actions::handle_delete_list(&mut self.state, target)
            }
            ModalAction::Entry(EntryAction::Submit) => {
                actions::handle_submit_entry(&mut self.state, &value)
            }
            ModalAction::Entry(EntryAction::PickCategory) => {
                actions::handle_pick_category(&mut self.state, &value)
            }
            ModalAction::Entry(EntryAction::QuickAdd) => {
                actions::handle_quick_add(&mut self.state, &value)
            }
            ModalAction::Dismiss => ActionResult::close(),
        };

        result.apply(&mut self.state);
    }
}
