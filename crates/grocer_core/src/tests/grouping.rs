//! Tests for grouping items by category

use super::sample;
use crate::grouping::{display_order, group_by_category};
use crate::model::{Category, Item, ItemId, ListId};

fn names(items: &[&Item]) -> Vec<String> {
    items.iter().map(|i| i.name.clone()).collect()
}

#[test]
fn test_weekly_groceries_grouping() {
    let manager = sample();
    let groups = group_by_category(&manager.list(ListId(1)).unwrap().items);

    let keys: Vec<_> = groups.keys().copied().collect();
    assert_eq!(
        keys,
        [Category::Dairy, Category::Vegetables, Category::Fruits]
    );
    assert_eq!(names(&groups[&Category::Dairy]), ["Milk", "Eggs"]);
    assert_eq!(names(&groups[&Category::Vegetables]), ["Onions"]);
    assert_eq!(names(&groups[&Category::Fruits]), ["Apples"]);
    assert!(groups[&Category::Fruits][0].completed);
}

#[test]
fn test_grouping_is_a_partition() {
    let mut manager = sample();
    for name in ["Bread", "Cheese", "Quinoa", "Grapes", "Milk", "Candles"] {
        manager.add_item(ListId(1), name, None).unwrap();
    }
    let items = &manager.list(ListId(1)).unwrap().items;
    let groups = group_by_category(items);

    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, items.len());

    for (category, members) in &groups {
        assert!(members.iter().all(|item| item.category == *category));
        let expected: Vec<ItemId> = items
            .iter()
            .filter(|item| item.category == *category)
            .map(|item| item.id)
            .collect();
        let actual: Vec<ItemId> = members.iter().map(|item| item.id).collect();
        assert_eq!(actual, expected);
    }

    let mut seen: Vec<Category> = Vec::new();
    for item in items {
        if !seen.contains(&item.category) {
            seen.push(item.category);
        }
    }
    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), seen);
}

#[test]
fn test_empty_input_gives_no_groups() {
    assert!(group_by_category(&[]).is_empty());
}

#[test]
fn test_display_order_follows_groups() {
    let mut manager = sample();
    manager.add_item(ListId(1), "Butter", None).unwrap();
    let order = display_order(&manager.list(ListId(1)).unwrap().items);
    assert_eq!(names(&order), ["Milk", "Eggs", "Butter", "Onions", "Apples"]);
}

#[test]
fn test_grouping_is_deterministic() {
    let manager = sample();
    let items = &manager.list(ListId(1)).unwrap().items;
    assert_eq!(group_by_category(items), group_by_category(items));
}
