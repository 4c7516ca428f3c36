//! Shared types used across the catalog and view pipeline.
//!
//! These types are serialized to JSON in the catalog manifest and must stay
//! identical between the scan and build surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of category tags a gallery item can carry.
///
/// The set is fixed: filter chips, auto-detection, and placeholder
/// description pools are all keyed by it. Serialized lowercase
/// (`"portraits"`, `"abstract"`, ...) in config files and manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Portraits,
    Abstract,
    Nature,
    Architecture,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Portraits,
        Category::Abstract,
        Category::Nature,
        Category::Architecture,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Portraits => "portraits",
            Category::Abstract => "abstract",
            Category::Nature => "nature",
            Category::Architecture => "architecture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter selection: either one category or the "all" sentinel.
///
/// Parsing is total — an unrecognized filter string degrades to [`Filter::All`]
/// rather than failing, so stale or mistyped filter values never break a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    /// Parse a filter string. `"all"` and anything unrecognized map to `All`.
    pub fn parse(s: &str) -> Filter {
        match s.trim().to_ascii_lowercase().as_str() {
            "portraits" => Filter::Category(Category::Portraits),
            "abstract" => Filter::Category(Category::Abstract),
            "nature" => Filter::Category(Category::Nature),
            "architecture" => Filter::Category(Category::Architecture),
            _ => Filter::All,
        }
    }

    /// Whether an item with the given category passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => c == category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Category(c) => f.write_str(c.as_str()),
        }
    }
}

/// A single catalog entry.
///
/// `id` is the 1-based construction position, unique and stable for the
/// process lifetime. `likes` and `saves` are cosmetic counters with no
/// consumer beyond display; `image_path` is a relative locator and is not
/// checked for existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub image_path: String,
    pub description: String,
    pub likes: u32,
    pub saves: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Portraits).unwrap();
        assert_eq!(json, "\"portraits\"");
        let back: Category = serde_json::from_str("\"architecture\"").unwrap();
        assert_eq!(back, Category::Architecture);
    }

    #[test]
    fn filter_parses_every_category() {
        for cat in Category::ALL {
            assert_eq!(Filter::parse(cat.as_str()), Filter::Category(cat));
        }
    }

    #[test]
    fn filter_parse_is_case_insensitive() {
        assert_eq!(Filter::parse("Nature"), Filter::Category(Category::Nature));
        assert_eq!(
            Filter::parse("  ABSTRACT "),
            Filter::Category(Category::Abstract)
        );
    }

    #[test]
    fn unrecognized_filter_degrades_to_all() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse(""), Filter::All);
        assert_eq!(Filter::parse("sculptures"), Filter::All);
    }

    #[test]
    fn all_filter_matches_everything() {
        for cat in Category::ALL {
            assert!(Filter::All.matches(cat));
        }
    }

    #[test]
    fn category_filter_matches_only_itself() {
        let f = Filter::Category(Category::Nature);
        assert!(f.matches(Category::Nature));
        assert!(!f.matches(Category::Abstract));
    }
}
