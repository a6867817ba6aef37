//! Serializable projection of the list collection
//!
//! Shape: `{ lists: [{ id, name, items: [{ id, name, completed, category }] }] }`

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::model::ShoppingList;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub lists: Vec<ShoppingList>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(SnapshotError::Serialize)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError::Parse)
    }

    /// Reject snapshots whose ids could not have come from a manager.
    /// Ids never reach `u32::MAX`, so the next id always fits.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut list_ids = FxHashSet::default();
        for list in &self.lists {
            if list.id.0 == u32::MAX {
                return Err(SnapshotError::IdOverflow {
                    list: list.id,
                    item: None,
                });
            }
            if !list_ids.insert(list.id) {
                return Err(SnapshotError::DuplicateListId(list.id));
            }
            let mut item_ids = FxHashSet::default();
            for item in &list.items {
                if item.id.0 == u32::MAX {
                    return Err(SnapshotError::IdOverflow {
                        list: list.id,
                        item: Some(item.id),
                    });
                }
                if !item_ids.insert(item.id) {
                    return Err(SnapshotError::DuplicateItemId {
                        list: list.id,
                        item: item.id,
                    });
                }
            }
        }
        Ok(())
    }

    /// First list id not used by this snapshot. Saturates on an
    /// unvalidated snapshot holding `u32::MAX`.
    pub fn next_list_id(&self) -> u32 {
        self.lists
            .iter()
            .map(|list| list.id.0.saturating_add(1))
            .max()
            .unwrap_or(1)
    }
}
