use std::fmt;

use crate::model::{ItemId, ListId};

/// Failed lookups. Unknown ids and a missing selection are only surfaced
/// when the manager runs with [`Lookups::Strict`](crate::manager::Lookups::Strict);
/// running out of ids is reported in either mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    ListNotFound(ListId),
    ItemNotFound { list: ListId, item: ItemId },
    /// An operation needed a selected list but none is selected
    NoCurrentList,
    /// Every list id, or every item id in `list`, has been handed out
    IdsExhausted { list: Option<ListId> },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::ListNotFound(id) => write!(f, "{id} not found"),
            LookupError::ItemNotFound { list, item } => write!(f, "{item} not found in {list}"),
            LookupError::NoCurrentList => write!(f, "no list selected"),
            LookupError::IdsExhausted { list: None } => write!(f, "no list ids left"),
            LookupError::IdsExhausted { list: Some(list) } => {
                write!(f, "no item ids left in {list}")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors while encoding or restoring a snapshot
#[derive(Debug)]
pub enum SnapshotError {
    Parse(serde_json::Error),
    Serialize(serde_json::Error),
    DuplicateListId(ListId),
    DuplicateItemId { list: ListId, item: ItemId },
    /// An id at `u32::MAX` leaves no room for the next allocation
    IdOverflow { list: ListId, item: Option<ItemId> },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Parse(e) => write!(f, "failed to parse snapshot: {e}"),
            SnapshotError::Serialize(e) => write!(f, "failed to serialize snapshot: {e}"),
            SnapshotError::DuplicateListId(id) => write!(f, "duplicate {id} in snapshot"),
            SnapshotError::DuplicateItemId { list, item } => {
                write!(f, "duplicate {item} in {list}")
            }
            SnapshotError::IdOverflow { list, item: None } => {
                write!(f, "{list} uses the reserved maximum id")
            }
            SnapshotError::IdOverflow {
                list,
                item: Some(item),
            } => write!(f, "{item} in {list} uses the reserved maximum id"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Parse(e) | SnapshotError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
