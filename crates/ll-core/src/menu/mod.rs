//! Menu domain models
//!
//! A menu is a flat list of [`MenuItem`]s. It is populated wholesale from the
//! menu source and is read-only afterwards.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    #[error("price must be a finite, non-negative amount, got {0}")]
    InvalidPrice(f64),

    #[error("unknown menu category: {0}")]
    UnknownCategory(String),

    #[error("duplicate menu item id: {0}")]
    DuplicateId(String),
}

/// Stable identifier of a menu item, unique across the menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(String);

impl MenuItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MenuItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MenuItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Price of a dish or drink.
///
/// Always finite and `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, MenuError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(MenuError::InvalidPrice(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = MenuError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MenuCategory {
    Starters,
    Mains,
    Desserts,
    Drinks,
}

impl MenuCategory {
    /// All categories in display order.
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Starters,
        MenuCategory::Mains,
        MenuCategory::Desserts,
        MenuCategory::Drinks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MenuCategory::Starters => "Starters",
            MenuCategory::Mains => "Mains",
            MenuCategory::Desserts => "Desserts",
            MenuCategory::Drinks => "Drinks",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuCategory {
    type Err = MenuError;

    /// Parses the persisted category name. Matching ignores ASCII case so that
    /// user input such as `mains` is accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MenuError::UnknownCategory(s.to_string()))
    }
}

/// One orderable dish or drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Price,
    pub category: MenuCategory,
    pub description: Option<String>,
    /// Image token, e.g. an emoji or a URI placeholder.
    pub image: Option<String>,
}

impl MenuItem {
    /// Case-insensitive substring match on the item name.
    ///
    /// An empty query matches every item.
    pub fn name_matches(&self, query: &str) -> bool {
        name_contains(&self.name, query)
    }
}

/// Case-insensitive substring test shared by the store search and the
/// in-memory menu filter.
pub fn name_contains(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Checks the menu-wide invariant that item ids are unique.
pub fn ensure_unique_ids(items: &[MenuItem]) -> Result<(), MenuError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(MenuError::DuplicateId(item.id.to_string()));
        }
    }
    Ok(())
}
