//! Shopping list state management
//!
//! This crate owns the data model and every state transition of the grocer
//! app. It supports:
//! - Named lists of categorized items with completion status
//! - Automatic categorization from a built-in catalog of common items
//! - A two-step entry flow that asks for a category when the name is unknown
//! - Grouping items by category for display
//! - Change notification for a presentation layer
//! - JSON snapshots of the list collection
//!
//! ```ignore
//! use grocer_core::{ListManager, ManagerOptions};
//!
//! let mut manager = ListManager::new(ManagerOptions::default());
//! let list = manager.create_list()?;
//! manager.select_list(list)?;
//! manager.resolve_entry("Milk")?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod catalog;
pub mod error;
pub mod grouping;
pub mod manager;
pub mod observer;
pub mod snapshot;
pub mod state;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use catalog::{Catalog, CatalogEntry, CatalogMatch};
pub use error::{LookupError, SnapshotError};
pub use grouping::{CategoryGroups, display_order, group_by_category};
pub use manager::{EntryOutcome, ListManager, Lookups, ManagerOptions};
pub use model::{Category, Item, ItemId, ListId, ShoppingList};
pub use observer::{StateChange, StateObserver};
pub use snapshot::Snapshot;
pub use state::{Session, View};
