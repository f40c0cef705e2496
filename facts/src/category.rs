//! Static category registry and the feed's category filter.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use std::fmt;
use std::str::FromStr;

use crate::{Fact, FactError};

/// A topical tag with its display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub color: &'static str,
}

/// Registry of categories, in filter/select display order.
pub const CATEGORIES: [Category; 8] = [
    Category { name: "Technology", color: "#3b82f6" },
    Category { name: "Science", color: "#16a34a" },
    Category { name: "Finance", color: "#ef4444" },
    Category { name: "Society", color: "#eab308" },
    Category { name: "Entertainment", color: "#db2777" },
    Category { name: "Health", color: "#14b8a6" },
    Category { name: "History", color: "#f97316" },
    Category { name: "News", color: "#8b5cf6" },
];

const FALLBACK_COLOR: &str = "#3b82f6";

/// Look up a category by exact name.
#[must_use]
pub fn find_category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Display color for a category name; unknown names get the default tag color.
#[must_use]
pub fn category_color(name: &str) -> &'static str {
    find_category(name).map_or(FALLBACK_COLOR, |c| c.color)
}

/// Which facts the feed shows: everything, or one category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Key of the synthetic "show everything" entry.
    pub const ALL_KEY: &'static str = "all";

    /// Filter for a registry category.
    #[must_use]
    pub fn category(category: &Category) -> Self {
        Self::Named(category.name.to_owned())
    }

    /// Category name to query, or `None` for all.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }

    /// Whether `fact` belongs in the filtered view.
    #[must_use]
    pub fn matches(&self, fact: &Fact) -> bool {
        self.name().is_none_or(|name| fact.category == name)
    }
}

impl FromStr for CategoryFilter {
    type Err = FactError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() || raw == Self::ALL_KEY {
            return Ok(Self::All);
        }
        find_category(raw)
            .map(Self::category)
            .ok_or_else(|| FactError::UnknownCategory(raw.to_owned()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(Self::ALL_KEY))
    }
}
