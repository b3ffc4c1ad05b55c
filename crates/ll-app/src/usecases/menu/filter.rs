//! In-memory menu filtering used by the menu screen.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use ll_core::menu::{MenuCategory, MenuItem};

/// Category chips plus the search box.
///
/// No selected category means every category is shown. The query is
/// matched case-insensitively against item names; a blank query matches all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFilter {
    categories: BTreeSet<MenuCategory>,
    query: String,
}

impl MenuFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = MenuCategory>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// Selects `category`, or deselects it when already selected.
    pub fn toggle_category(&mut self, category: MenuCategory) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into().trim().to_string();
    }

    pub fn categories(&self) -> &BTreeSet<MenuCategory> {
        &self.categories
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        let category_ok = self.categories.is_empty() || self.categories.contains(&item.category);
        category_ok && item.name_matches(&self.query)
    }

    pub fn apply<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
