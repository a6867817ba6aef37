//! Grouping of items for display

use indexmap::IndexMap;

use crate::model::{Category, Item};

/// Items keyed by category, in the order each category first appears
pub type CategoryGroups<'a> = IndexMap<Category, Vec<&'a Item>>;

/// Partition `items` by category.
///
/// Every item lands in exactly one group and keeps its relative order
/// within that group.
pub fn group_by_category(items: &[Item]) -> CategoryGroups<'_> {
    let mut groups = CategoryGroups::new();
    for item in items {
        groups.entry(item.category).or_default().push(item);
    }
    groups
}

/// Items in the order they are displayed: group by group.
pub fn display_order(items: &[Item]) -> Vec<&Item> {
    group_by_category(items).into_values().flatten().collect()
}
