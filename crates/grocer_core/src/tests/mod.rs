//! Behavioral tests for the list manager
//!
//! Tests are organized by topic:
//! - `lists` - Creating, duplicating, deleting lists and id assignment
//! - `items` - Adding and toggling items, categorization rules
//! - `entry` - The entry box flow and the category dialog
//! - `grouping` - Partitioning items by category
//! - `observers` - Change notification
//! - `snapshots` - JSON export and restore

mod entry;
mod grouping;
mod observers;

use crate::manager::{ListManager, Lookups, ManagerOptions};

fn sample() -> ListManager {
    ListManager::with_sample_data(ManagerOptions::default())
}

fn strict_sample() -> ListManager {
    ListManager::with_sample_data(ManagerOptions {
        lookups: Lookups::Strict,
        ..Default::default()
    })
}
