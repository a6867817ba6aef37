//! Change notification for the presentation layer
//!
//! Observers are told about every effective mutation of a
//! [`ListManager`](crate::ListManager). Operations that turn out to be
//! no-ops notify nobody.

use crate::model::{Category, ItemId, ListId};
use crate::state::View;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    ListCreated(ListId),
    ListDuplicated { source: ListId, copy: ListId },
    ListDeleted(ListId),
    /// A different list became the current one
    ListSelected(ListId),
    ItemAdded { list: ListId, item: ItemId, category: Category },
    ItemToggled { list: ListId, item: ItemId, completed: bool },
    ViewChanged(View),
    EntryChanged,
    QuickAddToggled(bool),
    CategoryDialogOpened,
    CategoryDialogClosed,
    /// The whole list collection was replaced from a snapshot
    Loaded,
}

impl StateChange {
    /// Whether this change touches data that would be persisted
    pub fn affects_lists(&self) -> bool {
        matches!(
            self,
            StateChange::ListCreated(_)
                | StateChange::ListDuplicated { .. }
                | StateChange::ListDeleted(_)
                | StateChange::ItemAdded { .. }
                | StateChange::ItemToggled { .. }
        )
    }
}

pub trait StateObserver {
    fn on_change(&mut self, change: &StateChange);
}

impl<F> StateObserver for F
where
    F: FnMut(&StateChange),
{
    fn on_change(&mut self, change: &StateChange) {
        self(change)
    }
}
