// Entry actions - search box, category dialog, quick add

use grocer_core::{Catalog, Category, EntryOutcome};

use crate::state::{AppState, ModalAction, ModalState, PickerModal, TextInputModal};

use super::ActionResult;

/// Text input for the search/entry box, pre-filled with pending text
pub fn open_entry(state: &AppState) -> ModalState {
    ModalState::TextInput(
        TextInputModal::new(
            "Add Item",
            "Type an item name and press Enter",
            state.manager.search_text(),
            ModalAction::SUBMIT_ENTRY,
        )
        .with_placeholder("Search or add new item..."),
    )
}

/// Picker over every category for the pending entry text
pub fn category_picker(state: &AppState) -> ModalState {
    let title = format!(
        "Select category for \"{}\"",
        state.manager.search_text().trim()
    );
    let options = Category::ALL.iter().map(|c| c.name().to_string()).collect();
    let selected = state.manager.session().selected_category.index();
    ModalState::Picker(
        PickerModal::new(&title, options, ModalAction::PICK_CATEGORY).with_selected(selected),
    )
}

/// Picker over the catalog, used as the quick-add panel
pub fn quick_add_picker() -> ModalState {
    let options = Catalog::global()
        .common_items()
        .map(str::to_string)
        .collect();
    ModalState::Picker(PickerModal::new("Quick Add", options, ModalAction::QUICK_ADD))
}

pub fn handle_submit_entry(state: &mut AppState, value: &str) -> ActionResult {
    match state.manager.resolve_entry(value) {
        Ok(EntryOutcome::Added { item, category }) => {
            tracing::debug!(item = item.0, %category, "entry added from catalog");
            ActionResult::close()
        }
        Ok(EntryOutcome::NeedsCategory) => ActionResult::modal(category_picker(state)),
        Ok(EntryOutcome::Empty) => ActionResult::close(),
        Ok(EntryOutcome::Ignored) => ActionResult::error("The list no longer exists"),
        Err(e) => ActionResult::error(e.to_string()),
    }
}

pub fn handle_pick_category(state: &mut AppState, value: &str) -> ActionResult {
    let Some(category) = Category::from_name(value) else {
        state.manager.cancel_category_dialog();
        return ActionResult::error(format!("Unknown category: {value}"));
    };
    match state.manager.choose_category(category) {
        Ok(_) => ActionResult::close(),
        Err(e) => ActionResult::error(e.to_string()),
    }
}

/// Open or close the quick-add panel
pub fn handle_toggle_quick_add(state: &mut AppState) -> ActionResult {
    if state.manager.toggle_quick_add() {
        ActionResult::modal(quick_add_picker())
    } else {
        ActionResult::close()
    }
}

pub fn handle_quick_add(state: &mut AppState, value: &str) -> ActionResult {
    match state.manager.quick_add(value) {
        Ok(_) => ActionResult::close(),
        Err(e) => ActionResult::error(e.to_string()),
    }
}

/// Keep the manager's dialog flags in step when a modal is dismissed
pub fn handle_cancel(state: &mut AppState, action: Option<ModalAction>) {
    match action {
        Some(ModalAction::PICK_CATEGORY) => state.manager.cancel_category_dialog(),
        Some(ModalAction::QUICK_ADD) if state.manager.session().quick_add_open => {
            state.manager.toggle_quick_add();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::ListId;

    fn viewing_party() -> AppState {
        let mut state = AppState::default();
        state.manager.select_list(ListId(2)).unwrap();
        state
    }

    #[test]
    fn test_catalog_entry_closes_modal() {
        let mut state = viewing_party();
        state.modal = open_entry(&state);
        handle_submit_entry(&mut state, "Tomatoes").apply(&mut state);

        assert!(!state.modal.is_open());
        let item = &state.manager.current_list().unwrap().items[0];
        assert_eq!(item.category, Category::Vegetables);
    }

    #[test]
    fn test_unknown_entry_opens_category_picker() {
        let mut state = viewing_party();
        handle_submit_entry(&mut state, "Quinoa").apply(&mut state);

        let ModalState::Picker(picker) = &state.modal else {
            panic!("expected category picker");
        };
        assert_eq!(picker.action, ModalAction::PICK_CATEGORY);
        assert_eq!(picker.title, "Select category for \"Quinoa\"");
        assert_eq!(picker.options.len(), Category::ALL.len());
        assert_eq!(picker.options[picker.selected_index], "Miscellaneous");
        assert!(state.manager.current_list().unwrap().items.is_empty());

        handle_pick_category(&mut state, "Bakery").apply(&mut state);
        assert!(!state.modal.is_open());
        let item = &state.manager.current_list().unwrap().items[0];
        assert_eq!(item.name, "Quinoa");
        assert_eq!(item.category, Category::Bakery);
        assert!(state.manager.search_text().is_empty());
    }

    #[test]
    fn test_picker_remembers_last_category() {
        let mut state = viewing_party();
        handle_submit_entry(&mut state, "Quinoa").apply(&mut state);
        handle_pick_category(&mut state, "Meat").apply(&mut state);
        handle_submit_entry(&mut state, "Tofu").apply(&mut state);

        let ModalState::Picker(picker) = &state.modal else {
            panic!("expected category picker");
        };
        assert_eq!(picker.options[picker.selected_index], "Meat");
    }

    #[test]
    fn test_cancel_category_keeps_text() {
        let mut state = viewing_party();
        handle_submit_entry(&mut state, "Quinoa").apply(&mut state);
        let action = state.modal.action();
        handle_cancel(&mut state, action);
        assert!(!state.manager.session().category_dialog_open);
        assert_eq!(state.manager.search_text(), "Quinoa");

        let ModalState::TextInput(input) = open_entry(&state) else {
            panic!("expected text input");
        };
        assert_eq!(input.value, "Quinoa");
    }

    #[test]
    fn test_quick_add_flow() {
        let mut state = viewing_party();
        handle_toggle_quick_add(&mut state).apply(&mut state);
        assert!(state.manager.session().quick_add_open);
        assert!(matches!(&state.modal, ModalState::Picker(p) if p.action == ModalAction::QUICK_ADD));

        handle_quick_add(&mut state, "Shampoo").apply(&mut state);
        assert!(!state.manager.session().quick_add_open);
        assert_eq!(
            state.manager.current_list().unwrap().items[0].category,
            Category::PersonalCare
        );
    }

    #[test]
    fn test_cancel_quick_add_closes_panel() {
        let mut state = viewing_party();
        handle_toggle_quick_add(&mut state).apply(&mut state);
        handle_cancel(&mut state, Some(ModalAction::QUICK_ADD));
        assert!(!state.manager.session().quick_add_open);
    }

    #[test]
    fn test_unknown_category_name_is_an_error() {
        let mut state = viewing_party();
        handle_submit_entry(&mut state, "Quinoa").apply(&mut state);
        handle_pick_category(&mut state, "Snacks").apply(&mut state);
        assert!(state.error_message.is_some());
        assert!(!state.manager.session().category_dialog_open);
    }
}
