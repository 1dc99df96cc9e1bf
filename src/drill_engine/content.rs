//! Read-only content tables.
//!
//! The engines only ever see `&[T]`; the catalogue is where screens get those
//! slices from, keyed by category and level.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::drill_engine::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Characters,
    Numbers,
    Letters,
    Vehicles,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Characters => write!(f, "Characters"),
            Category::Numbers    => write!(f, "Numbers"),
            Category::Letters    => write!(f, "Letters"),
            Category::Vehicles   => write!(f, "Vehicles"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub display: String,
    pub pronunciation: String,
    pub usage: String,
    pub icon: String,
}

impl ContentItem {
    pub fn new(display: &str, pronunciation: &str, usage: &str, icon: &str) -> Self {
        ContentItem {
            display: display.to_string(),
            pronunciation: pronunciation.to_string(),
            usage: usage.to_string(),
            icon: icon.to_string(),
        }
    }

    /// Display strings only, e.g. as an option pool.
    pub fn displays(items: &[ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.display.clone()).collect()
    }
}

pub trait Catalogue {
    /// Items for `category` at `level`; empty if there are none.
    fn items(&self, category: Category, level: u32) -> &[ContentItem];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogueEntry {
    category: Category,
    level: u32,
    items: Vec<ContentItem>,
}

#[derive(Debug, Clone, Default)]
pub struct StaticCatalogue {
    entries: HashMap<(Category, u32), Vec<ContentItem>>,
}

impl StaticCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add items to a table. Repeated calls for the same key append.
    pub fn insert(&mut self, category: Category, level: u32, items: Vec<ContentItem>) {
        self.entries.entry((category, level)).or_default().extend(items);
    }

    /// Load a JSON array of `{ "category", "level", "items" }` tables.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<CatalogueEntry> = serde_json::from_str(json)?;
        let mut catalogue = Self::new();
        for e in entries {
            catalogue.insert(e.category, e.level, e.items);
        }
        Ok(catalogue)
    }
}

impl Catalogue for StaticCatalogue {
    fn items(&self, category: Category, level: u32) -> &[ContentItem] {
        self.entries
            .get(&(category, level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
