//! Closed set of item categories

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display grouping for items.
///
/// Serialized using the human-readable name so saved lists read naturally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Dairy,
    Vegetables,
    Fruits,
    Beverages,
    Bakery,
    Meat,
    #[serde(rename = "Cleaning Supplies")]
    CleaningSupplies,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[default]
    Miscellaneous,
}

impl Category {
    /// All categories in picker order. `Miscellaneous` is always last.
    pub const ALL: [Category; 9] = [
        Category::Dairy,
        Category::Vegetables,
        Category::Fruits,
        Category::Beverages,
        Category::Bakery,
        Category::Meat,
        Category::CleaningSupplies,
        Category::PersonalCare,
        Category::Miscellaneous,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Dairy => "Dairy",
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::Beverages => "Beverages",
            Category::Bakery => "Bakery",
            Category::Meat => "Meat",
            Category::CleaningSupplies => "Cleaning Supplies",
            Category::PersonalCare => "Personal Care",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Self::ALL.len() - 1)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Category::from_name("Dairy"), Some(Category::Dairy));
        assert_eq!(
            Category::from_name("Cleaning Supplies"),
            Some(Category::CleaningSupplies)
        );
        assert_eq!(Category::from_name("dairy"), None);
        assert_eq!(Category::from_name("Snacks"), None);
    }

    #[test]
    fn test_default_is_miscellaneous() {
        assert_eq!(Category::default(), Category::Miscellaneous);
        assert_eq!(Category::Miscellaneous.index(), Category::ALL.len() - 1);
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::PersonalCare).unwrap();
        assert_eq!(json, "\"Personal Care\"");
        let back: Category = serde_json::from_str("\"Personal Care\"").unwrap();
        assert_eq!(back, Category::PersonalCare);
    }
}
