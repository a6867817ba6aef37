//! Tests for change notification

use std::cell::RefCell;
use std::rc::Rc;

use super::sample;
use crate::manager::ListManager;
use crate::model::{Category, ItemId, ListId};
use crate::observer::StateChange;
use crate::state::View;

fn recorded(manager: &mut ListManager) -> Rc<RefCell<Vec<StateChange>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    manager.subscribe(move |change: &StateChange| sink.borrow_mut().push(change.clone()));
    log
}

#[test]
fn test_each_mutation_notifies_once() {
    let mut manager = sample();
    let log = recorded(&mut manager);

    let created = manager.create_list().unwrap();
    let copy = manager.duplicate_list(ListId(1)).unwrap().unwrap();
    manager.toggle_item(ListId(1), ItemId(1)).unwrap();
    manager.delete_list(created).unwrap();

    assert_eq!(
        *log.borrow(),
        [
            StateChange::ListCreated(created),
            StateChange::ListDuplicated {
                source: ListId(1),
                copy
            },
            StateChange::ItemToggled {
                list: ListId(1),
                item: ItemId(1),
                completed: true
            },
            StateChange::ListDeleted(created),
        ]
    );
}

#[test]
fn test_noops_are_silent() {
    let mut manager = sample();
    let log = recorded(&mut manager);

    manager.duplicate_list(ListId(50)).unwrap();
    manager.delete_list(ListId(50)).unwrap();
    manager.toggle_item(ListId(1), ItemId(50)).unwrap();
    manager.back();
    manager.cancel_category_dialog();
    manager.resolve_entry("  ").unwrap();
    manager.set_search_text("");

    assert!(log.borrow().is_empty());
}

#[test]
fn test_deferred_entry_sequence() {
    let mut manager = sample();
    manager.select_list(ListId(2)).unwrap();
    let log = recorded(&mut manager);

    manager.resolve_entry("Quinoa").unwrap();
    let item = manager.choose_category(Category::Meat).unwrap().unwrap();

    assert_eq!(
        *log.borrow(),
        [
            StateChange::EntryChanged,
            StateChange::CategoryDialogOpened,
            StateChange::ItemAdded {
                list: ListId(2),
                item,
                category: Category::Meat
            },
            StateChange::EntryChanged,
            StateChange::CategoryDialogClosed,
        ]
    );
}

#[test]
fn test_deleting_viewed_list_reports_view_change() {
    let mut manager = sample();
    manager.select_list(ListId(1)).unwrap();
    let log = recorded(&mut manager);

    manager.delete_list(ListId(1)).unwrap();
    assert_eq!(
        *log.borrow(),
        [
            StateChange::ListDeleted(ListId(1)),
            StateChange::ViewChanged(View::Lists),
        ]
    );
}

#[test]
fn test_deleting_current_list_reports_cleared_entry() {
    // Sample data starts on the overview with list 1 current
    let mut manager = sample();
    manager.set_search_text("Quin");
    let log = recorded(&mut manager);

    manager.delete_list(ListId(1)).unwrap();
    assert_eq!(manager.search_text(), "");
    assert_eq!(manager.current_list_id(), None);
    assert_eq!(
        *log.borrow(),
        [StateChange::ListDeleted(ListId(1)), StateChange::EntryChanged]
    );
}

#[test]
fn test_deleting_viewed_list_reports_every_reset() {
    let mut manager = sample();
    manager.select_list(ListId(1)).unwrap();
    manager.resolve_entry("Quinoa").unwrap();
    manager.toggle_quick_add();
    let log = recorded(&mut manager);

    manager.delete_list(ListId(1)).unwrap();
    let session = manager.session();
    assert!(!session.quick_add_open);
    assert!(!session.category_dialog_open);
    assert_eq!(
        *log.borrow(),
        [
            StateChange::ListDeleted(ListId(1)),
            StateChange::ViewChanged(View::Lists),
            StateChange::QuickAddToggled(false),
            StateChange::EntryChanged,
            StateChange::CategoryDialogClosed,
        ]
    );
}

#[test]
fn test_switching_lists_in_items_view() {
    let mut manager = sample();
    manager.select_list(ListId(1)).unwrap();
    let log = recorded(&mut manager);

    manager.select_list(ListId(2)).unwrap();
    manager.select_list(ListId(2)).unwrap();
    assert_eq!(*log.borrow(), [StateChange::ListSelected(ListId(2))]);
}

#[test]
fn test_back_reports_closed_panels() {
    let mut manager = sample();
    manager.select_list(ListId(1)).unwrap();
    manager.toggle_quick_add();
    let log = recorded(&mut manager);

    manager.back();
    assert_eq!(
        *log.borrow(),
        [
            StateChange::ViewChanged(View::Lists),
            StateChange::QuickAddToggled(false),
        ]
    );
}

#[test]
fn test_affects_lists() {
    assert!(StateChange::ListCreated(ListId(1)).affects_lists());
    assert!(!StateChange::ViewChanged(View::Items).affects_lists());
    assert!(!StateChange::EntryChanged.affects_lists());
    assert!(!StateChange::ListSelected(ListId(2)).affects_lists());
}
