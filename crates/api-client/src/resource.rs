//! Resource kinds known to the backend

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A remotely stored entity family addressable by identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Menu items
    Food,
    /// Restaurants
    Restaurant,
    /// Saved restaurants and dishes
    Bookmark,
    /// Shopping carts
    Cart,
}

impl Resource {
    /// Every known resource
    pub const ALL: [Self; 4] = [Self::Food, Self::Restaurant, Self::Bookmark, Self::Cart];

    /// Label used in envelope messages
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Restaurant => "Restaurant",
            Self::Bookmark => "Bookmark",
            Self::Cart => "Cart",
        }
    }

    /// Path segment used unless configured otherwise
    #[must_use]
    pub fn default_path(self) -> &'static str {
        match self {
            Self::Food => "/food",
            Self::Restaurant => "/restaurant",
            Self::Bookmark => "/bookmark",
            Self::Cart => "/cart",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" | "foods" => Ok(Self::Food),
            "restaurant" | "restaurants" => Ok(Self::Restaurant),
            "bookmark" | "bookmarks" => Ok(Self::Bookmark),
            "cart" | "carts" => Ok(Self::Cart),
            other => Err(format!("unknown resource: {other}")),
        }
    }
}
