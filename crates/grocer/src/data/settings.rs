//! User preferences stored in `config.yaml`

use grocer_core::{CatalogMatch, Lookups, ManagerOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How typed names are matched against the item catalog
    pub catalog_match: CatalogMatch,
    /// Whether unknown ids are reported or ignored
    pub lookups: Lookups,
    /// Save on exit when there are unsaved changes
    pub autosave: bool,
}

impl Settings {
    pub fn manager_options(&self) -> ManagerOptions {
        ManagerOptions {
            lookups: self.lookups,
            catalog_match: self.catalog_match,
        }
    }
}
