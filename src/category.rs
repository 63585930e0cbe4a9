//! Recipe categories offered by the category selector
//!
//! The selector is a fixed, single-select set. [`Category::All`] is the
//! sentinel meaning "no category restriction"; every other variant maps to the
//! exact label stored in [`Recipe::category`](crate::Recipe).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category choice in the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// No restriction
    #[default]
    #[serde(alias = "Все")]
    All,
    #[serde(alias = "Завтрак")]
    Breakfast,
    #[serde(alias = "Обед")]
    Lunch,
    #[serde(alias = "Ужин")]
    Dinner,
    #[serde(alias = "Перекус")]
    Snack,
}

/// Unknown category label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}' (expected one of: Все, Завтрак, Обед, Ужин, Перекус)")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// All choices in selector order, sentinel first
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Snack,
    ];

    /// Display label, also the value recipes carry in their `category` field
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Breakfast => "Завтрак",
            Self::Lunch => "Обед",
            Self::Dinner => "Ужин",
            Self::Snack => "Перекус",
        }
    }

    /// Lowercase English name, used in config files and on the command line
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    #[must_use]
    pub const fn is_all(self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a recipe category label passes this choice
    ///
    /// Comparison against the label is exact and case-sensitive.
    #[must_use]
    pub fn admits(self, recipe_category: &str) -> bool {
        self.is_all() || recipe_category == self.label()
    }

    /// Concrete category for a recipe label, never the sentinel
    #[must_use]
    pub fn from_recipe_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .filter(|c| !c.is_all())
            .find(|c| c.label() == label)
    }

    /// Next choice in selector order, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous choice in selector order, wrapping around
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Index within [`Category::ALL`]
    #[must_use]
    pub fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s || c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
