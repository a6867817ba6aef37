use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use grocer_core::{ItemId, ListId, ListManager, StateChange, View, display_order};

use crate::data::settings::Settings;
use crate::data::storage::{DataDirectory, StorageError};

use super::ModalState;

/// Cursor on the lists screen
#[derive(Debug, Default)]
pub struct ListsState {
    pub selected_index: usize,
}

/// Cursor on the items screen, indexing items in display order
#[derive(Debug, Default)]
pub struct ItemsState {
    pub selected_index: usize,
}

/// Everything the UI needs: the list manager plus screen-local state.
pub struct AppState {
    pub manager: ListManager,
    pub settings: Settings,
    pub modal: ModalState,
    pub lists_state: ListsState,
    pub items_state: ItemsState,
    pub error_message: Option<String>,
    pub exit: bool,
    pub data_dir: Option<PathBuf>,
    dirty: Rc<Cell<bool>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_manager(ListManager::with_sample_data(Default::default()), Settings::default())
    }
}

impl AppState {
    /// Wrap a manager, tracking unsaved list changes through an observer
    pub fn from_manager(mut manager: ListManager, settings: Settings) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        manager.subscribe(move |change: &StateChange| {
            if change.affects_lists() {
                flag.set(true);
            }
        });

        Self {
            manager,
            settings,
            modal: ModalState::None,
            lists_state: ListsState::default(),
            items_state: ItemsState::default(),
            error_message: None,
            exit: false,
            data_dir: None,
            dirty,
        }
    }

    /// Load settings and lists from `data_dir`. First launch gets sample lists.
    pub fn load_from_data_dir(data_dir: PathBuf) -> Result<Self, StorageError> {
        let storage = DataDirectory::new(data_dir.clone());
        let settings = storage.load_settings()?;
        if !storage.has_settings() {
            // First launch: leave an editable config.yaml with the defaults
            match storage.save_settings(&settings) {
                Ok(()) => tracing::info!("Wrote default settings to {}", data_dir.display()),
                Err(e) => tracing::warn!("Could not write default settings: {e}"),
            }
        }
        let mut manager = ListManager::with_sample_data(settings.manager_options());

        if let Some(snapshot) = storage.load_lists()? {
            manager.restore(snapshot)?;
            tracing::info!(
                lists = manager.lists().len(),
                "Loaded lists from {}",
                data_dir.display()
            );
        } else {
            tracing::info!("No saved lists in {}, starting with samples", data_dir.display());
        }

        let mut state = Self::from_manager(manager, settings);
        state.data_dir = Some(data_dir);
        Ok(state)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty.get()
    }

    pub fn mark_saved(&mut self) {
        self.dirty.set(false);
    }

    /// Flag lists as changed outside of the manager's list operations
    pub fn mark_modified(&mut self) {
        self.dirty.set(true);
    }

    /// Write all lists to the data directory
    pub fn save(&mut self) -> Result<(), StorageError> {
        let Some(data_dir) = &self.data_dir else {
            return Err(StorageError::Io("No data directory configured".to_string()));
        };
        DataDirectory::new(data_dir.clone()).save_lists(&self.manager.snapshot())?;
        self.mark_saved();
        Ok(())
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::warn!("{msg}");
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    // ========== Selection helpers ==========

    /// The list under the cursor on the lists screen
    pub fn selected_list_id(&self) -> Option<ListId> {
        self.manager
            .lists()
            .get(self.lists_state.selected_index)
            .map(|list| list.id)
    }

    /// The item under the cursor on the items screen
    pub fn selected_item_id(&self) -> Option<ItemId> {
        let list = self.manager.current_list()?;
        display_order(&list.items)
            .get(self.items_state.selected_index)
            .map(|item| item.id)
    }

    /// Keep both cursors inside their collections after a mutation
    pub fn clamp_selection(&mut self) {
        let list_count = self.manager.lists().len();
        self.lists_state.selected_index = self
            .lists_state
            .selected_index
            .min(list_count.saturating_sub(1));

        let item_count = self
            .manager
            .current_list()
            .map(|list| list.items.len())
            .unwrap_or(0);
        self.items_state.selected_index = self
            .items_state
            .selected_index
            .min(item_count.saturating_sub(1));
    }

    pub fn in_items_view(&self) -> bool {
        self.manager.view() == View::Items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dirty_tracking_ignores_navigation() {
        let mut state = AppState::default();
        state.manager.select_list(ListId(1)).unwrap();
        state.manager.set_search_text("abc");
        assert!(!state.has_unsaved_changes());

        state.manager.create_list().unwrap();
        assert!(state.has_unsaved_changes());
        state.mark_saved();
        assert!(!state.has_unsaved_changes());
    }

    #[test]
    fn test_first_launch_then_reload() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".grocer");

        let mut state = AppState::load_from_data_dir(dir.clone()).unwrap();
        assert_eq!(state.manager.lists().len(), 2);
        assert!(DataDirectory::new(dir.clone()).has_settings());
        let created = state.manager.create_list().unwrap();
        state.save().unwrap();
        assert!(!state.has_unsaved_changes());

        let reloaded = AppState::load_from_data_dir(dir).unwrap();
        assert_eq!(reloaded.manager.lists().len(), 3);
        assert!(reloaded.manager.list(created).is_some());
        assert!(!reloaded.has_unsaved_changes());
    }

    #[test]
    fn test_existing_settings_are_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".grocer");
        let storage = DataDirectory::new(dir.clone());
        let custom = Settings {
            autosave: true,
            ..Default::default()
        };
        storage.save_settings(&custom).unwrap();

        let state = AppState::load_from_data_dir(dir).unwrap();
        assert!(state.settings.autosave);
        assert_eq!(storage.load_settings().unwrap(), custom);
    }

    #[test]
    fn test_save_without_data_dir_fails() {
        let mut state = AppState::default();
        assert!(matches!(state.save(), Err(StorageError::Io(_))));
    }

    #[test]
    fn test_clamp_selection() {
        let mut state = AppState::default();
        state.lists_state.selected_index = 9;
        state.manager.select_list(ListId(1)).unwrap();
        state.items_state.selected_index = 9;
        state.clamp_selection();
        assert_eq!(state.lists_state.selected_index, 1);
        assert_eq!(state.items_state.selected_index, 3);
    }

    #[test]
    fn test_selected_item_follows_display_order() {
        let mut state = AppState::default();
        state.manager.select_list(ListId(1)).unwrap();
        state.manager.add_item(ListId(1), "Cheese", None).unwrap();
        state.items_state.selected_index = 2;
        let id = state.selected_item_id().unwrap();
        assert_eq!(
            state.manager.current_list().unwrap().item(id).unwrap().name,
            "Cheese"
        );
    }
}
