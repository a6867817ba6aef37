//! Shopping lists and their items

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::{ItemId, ListId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub completed: bool,
    pub category: Category,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
            category,
        }
    }
}

/// A named, ordered collection of items.
///
/// Item order is insertion order and drives display order within each
/// category group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
    /// Next item id to hand out. Not persisted; recovered from `items`.
    #[serde(skip)]
    next_item_id: u32,
}

impl PartialEq for ShoppingList {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.items == other.items
    }
}

impl ShoppingList {
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
            next_item_id: 1,
        }
    }

    /// Copy of this list under a new id and name. Items keep their ids and
    /// the id counter carries over so later additions never collide.
    pub fn duplicate(&self, id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: self.items.clone(),
            next_item_id: self.next_item_id,
        }
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Append a new, uncompleted item and return its id, or `None` once
    /// the list has run out of ids.
    pub fn push_item(&mut self, name: impl Into<String>, category: Category) -> Option<ItemId> {
        let id = self.allocate_item_id()?;
        self.items.push(Item::new(id, name, category));
        Some(id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    fn allocate_item_id(&mut self) -> Option<ItemId> {
        let mut id = self.next_item_id.max(1);
        for item in &self.items {
            id = id.max(item.id.0.checked_add(1)?);
        }
        self.next_item_id = id.checked_add(1)?;
        Some(ItemId(id))
    }
}
