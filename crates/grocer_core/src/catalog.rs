//! Built-in catalog of common grocery items
//!
//! Maps well-known item names to their category. The catalog is read-only
//! reference data shared by every manager in the process.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::Category;

/// Catalog entries in quick-add display order
const ENTRIES: &[(&str, Category)] = &[
    ("Milk", Category::Dairy),
    ("Eggs", Category::Dairy),
    ("Cheese", Category::Dairy),
    ("Butter", Category::Dairy),
    ("Yogurt", Category::Dairy),
    ("Cream", Category::Dairy),
    ("Tomatoes", Category::Vegetables),
    ("Onions", Category::Vegetables),
    ("Potatoes", Category::Vegetables),
    ("Carrots", Category::Vegetables),
    ("Lettuce", Category::Vegetables),
    ("Cucumber", Category::Vegetables),
    ("Bell Peppers", Category::Vegetables),
    ("Apples", Category::Fruits),
    ("Bananas", Category::Fruits),
    ("Oranges", Category::Fruits),
    ("Berries", Category::Fruits),
    ("Grapes", Category::Fruits),
    ("Orange Juice", Category::Beverages),
    ("Coffee", Category::Beverages),
    ("Tea", Category::Beverages),
    ("Soda", Category::Beverages),
    ("Bread", Category::Bakery),
    ("Bagels", Category::Bakery),
    ("Muffins", Category::Bakery),
    ("Cookies", Category::Bakery),
    ("Chicken", Category::Meat),
    ("Beef", Category::Meat),
    ("Pork", Category::Meat),
    ("Fish", Category::Meat),
    ("Paper Towels", Category::CleaningSupplies),
    ("Soap", Category::CleaningSupplies),
    ("Detergent", Category::CleaningSupplies),
    ("Toothpaste", Category::PersonalCare),
    ("Shampoo", Category::PersonalCare),
    ("Deodorant", Category::PersonalCare),
];

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// How item names are matched against the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogMatch {
    /// Name must equal a catalog key byte for byte
    #[default]
    Exact,
    /// Surrounding whitespace and ASCII case are ignored
    IgnoreCase,
}

/// A catalog hit: the canonical spelling plus its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: Category,
}

pub struct Catalog {
    exact: FxHashMap<&'static str, Category>,
    folded: FxHashMap<String, &'static str>,
}

impl Catalog {
    fn build() -> Self {
        let mut exact = FxHashMap::default();
        let mut folded = FxHashMap::default();
        for &(name, category) in ENTRIES {
            exact.insert(name, category);
            folded.insert(name.to_ascii_lowercase(), name);
        }
        Self { exact, folded }
    }

    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    pub fn lookup(&self, name: &str, mode: CatalogMatch) -> Option<CatalogEntry> {
        match mode {
            CatalogMatch::Exact => self
                .exact
                .get_key_value(name)
                .map(|(&name, &category)| CatalogEntry { name, category }),
            CatalogMatch::IgnoreCase => {
                let canonical = *self.folded.get(&name.trim().to_ascii_lowercase())?;
                self.lookup(canonical, CatalogMatch::Exact)
            }
        }
    }

    /// Item names in display order
    pub fn common_items(&self) -> impl Iterator<Item = &'static str> {
        ENTRIES.iter().map(|&(name, _)| name)
    }

    pub fn len(&self) -> usize {
        ENTRIES.len()
    }

    pub fn is_empty(&self) -> bool {
        ENTRIES.is_empty()
    }
}
