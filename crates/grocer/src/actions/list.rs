// List actions - create, duplicate, delete

use grocer_core::ListId;

use crate::state::{AppState, ConfirmModal, ModalAction, ModalState};

use super::ActionResult;

/// Create a list and move the cursor onto it
pub fn handle_create_list(state: &mut AppState) -> ActionResult {
    match state.manager.create_list() {
        Ok(_) => {
            state.lists_state.selected_index = state.manager.lists().len().saturating_sub(1);
            ActionResult::close()
        }
        Err(e) => ActionResult::error(e.to_string()),
    }
}

pub fn handle_duplicate_list(state: &mut AppState, list: ListId) -> ActionResult {
    match state.manager.duplicate_list(list) {
        Ok(Some(_)) => {
            state.lists_state.selected_index = state.manager.lists().len().saturating_sub(1);
            ActionResult::close()
        }
        Ok(None) => ActionResult::close(),
        Err(e) => ActionResult::error(e.to_string()),
    }
}

/// Ask before deleting a list
pub fn confirm_delete_list(state: &AppState, list: ListId) -> Option<ModalState> {
    let target = state.manager.list(list)?;
    let message = format!(
        "Delete \"{}\" and its {} item(s)?",
        target.name,
        target.item_count()
    );
    Some(ModalState::Confirm(
        ConfirmModal::new("Delete List", &message, ModalAction::DELETE_LIST).with_target(list),
    ))
}

pub fn handle_delete_list(state: &mut AppState, list: Option<ListId>) -> ActionResult {
    let Some(list) = list else {
        return ActionResult::close();
    };
    match state.manager.delete_list(list) {
        Ok(()) => ActionResult::close(),
        Err(e) => ActionResult::error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::View;

    #[test]
    fn test_create_moves_cursor_to_new_list() {
        let mut state = AppState::default();
        handle_create_list(&mut state).apply(&mut state);
        assert_eq!(state.lists_state.selected_index, 2);
        assert_eq!(state.selected_list_id(), Some(ListId(3)));
    }

    #[test]
    fn test_duplicate_moves_cursor_to_copy() {
        let mut state = AppState::default();
        handle_duplicate_list(&mut state, ListId(1)).apply(&mut state);
        let copy = state.selected_list_id().unwrap();
        assert_eq!(
            state.manager.list(copy).unwrap().name,
            "Weekly Groceries (Copy)"
        );
    }

    #[test]
    fn test_confirm_then_delete() {
        let mut state = AppState::default();
        state.lists_state.selected_index = 1;

        let modal = confirm_delete_list(&state, ListId(2)).unwrap();
        let ModalState::Confirm(confirm) = &modal else {
            panic!("expected confirm modal");
        };
        assert_eq!(confirm.target, Some(ListId(2)));
        assert!(confirm.message.contains("Party Shopping"));

        handle_delete_list(&mut state, confirm.target).apply(&mut state);
        assert_eq!(state.manager.lists().len(), 1);
        assert_eq!(state.lists_state.selected_index, 0);
        assert_eq!(state.manager.view(), View::Lists);
    }

    #[test]
    fn test_confirm_for_missing_list() {
        let state = AppState::default();
        assert!(confirm_delete_list(&state, ListId(77)).is_none());
    }
}
