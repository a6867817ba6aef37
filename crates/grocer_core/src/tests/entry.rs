//! Tests for the entry box flow

use super::{sample, strict_sample};
use crate::error::LookupError;
use crate::manager::{EntryOutcome, ListManager};
use crate::model::{Category, ListId};

fn viewing_weekly() -> ListManager {
    let mut manager = sample();
    manager.select_list(ListId(1)).unwrap();
    manager
}

#[test]
fn test_catalog_name_is_added_immediately() {
    let mut manager = viewing_weekly();
    let outcome = manager.resolve_entry("Tomatoes").unwrap();

    let EntryOutcome::Added { item, category } = outcome else {
        panic!("expected immediate add, got {outcome:?}");
    };
    assert_eq!(category, Category::Vegetables);
    assert!(!manager.session().category_dialog_open);
    assert!(manager.search_text().is_empty());

    let added = manager.current_list().unwrap().item(item).unwrap();
    assert_eq!(added.name, "Tomatoes");
    assert_eq!(added.category, Category::Vegetables);
}

#[test]
fn test_entry_is_trimmed() {
    let mut manager = viewing_weekly();
    let outcome = manager.resolve_entry("  Coffee \t").unwrap();
    assert!(matches!(
        outcome,
        EntryOutcome::Added {
            category: Category::Beverages,
            ..
        }
    ));
    assert_eq!(manager.current_list().unwrap().items.last().unwrap().name, "Coffee");
}

#[test]
fn test_blank_entry_does_nothing() {
    let mut manager = viewing_weekly();
    let before = manager.snapshot();
    assert_eq!(manager.resolve_entry("   ").unwrap(), EntryOutcome::Empty);
    assert_eq!(manager.resolve_entry("").unwrap(), EntryOutcome::Empty);
    assert_eq!(manager.snapshot(), before);
    assert!(!manager.session().category_dialog_open);
}

#[test]
fn test_unknown_name_opens_dialog_and_defers_add() {
    let mut manager = viewing_weekly();
    let count = manager.current_list().unwrap().item_count();

    assert_eq!(
        manager.resolve_entry("Quinoa").unwrap(),
        EntryOutcome::NeedsCategory
    );
    assert!(manager.session().category_dialog_open);
    assert_eq!(manager.search_text(), "Quinoa");
    assert_eq!(manager.current_list().unwrap().item_count(), count);
}

#[test]
fn test_choosing_category_completes_entry() {
    let mut manager = viewing_weekly();
    manager.resolve_entry(" Quinoa ").unwrap();
    let id = manager.choose_category(Category::Bakery).unwrap().unwrap();

    let item = manager.current_list().unwrap().item(id).unwrap();
    assert_eq!(item.name, "Quinoa");
    assert_eq!(item.category, Category::Bakery);
    assert!(!manager.session().category_dialog_open);
    assert!(manager.search_text().is_empty());
    assert_eq!(manager.session().selected_category, Category::Bakery);
}

#[test]
fn test_choose_without_dialog_is_noop() {
    let mut manager = viewing_weekly();
    let before = manager.snapshot();
    assert_eq!(manager.choose_category(Category::Meat).unwrap(), None);
    assert_eq!(manager.snapshot(), before);
}

#[test]
fn test_cancel_keeps_text() {
    let mut manager = viewing_weekly();
    manager.resolve_entry("Quinoa").unwrap();
    manager.cancel_category_dialog();

    assert!(!manager.session().category_dialog_open);
    assert_eq!(manager.search_text(), "Quinoa");
    assert_eq!(manager.choose_category(Category::Meat).unwrap(), None);
}

#[test]
fn test_back_closes_dialog() {
    let mut manager = viewing_weekly();
    manager.resolve_entry("Quinoa").unwrap();
    manager.back();
    assert!(!manager.session().category_dialog_open);
}

#[test]
fn test_entry_with_no_list_selected() {
    let mut manager = ListManager::default();
    assert_eq!(
        manager.resolve_entry("Milk").unwrap(),
        EntryOutcome::Ignored
    );

    let mut strict = strict_sample();
    strict.delete_list(ListId(1)).unwrap();
    assert_eq!(strict.resolve_entry("Milk"), Err(LookupError::NoCurrentList));
}

#[test]
fn test_choose_category_with_no_list_closes_dialog() {
    let mut manager = ListManager::default();
    assert_eq!(
        manager.resolve_entry("Quinoa").unwrap(),
        EntryOutcome::NeedsCategory
    );
    assert_eq!(manager.choose_category(Category::Meat).unwrap(), None);
    assert!(!manager.session().category_dialog_open);
    assert_eq!(manager.search_text(), "Quinoa");

    let mut strict = strict_sample();
    strict.delete_list(ListId(1)).unwrap();
    strict.resolve_entry("Quinoa").unwrap();
    assert_eq!(
        strict.choose_category(Category::Meat),
        Err(LookupError::NoCurrentList)
    );
    assert!(!strict.session().category_dialog_open);
}
