//! Catalog construction and queries.
//!
//! The catalog is the fixed, ordered set of gallery items everything else
//! reads from. It is built once from a list of photo filenames plus an
//! optional per-filename override table, and never mutated afterwards —
//! there is no create/update/delete surface at runtime.
//!
//! ## Construction contract
//!
//! One item per filename, in input order, with `id` assigned as the 1-based
//! position. Per field:
//!
//! - **Category**: override wins; otherwise detected from the filename by
//!   case-insensitive keyword match ([`detect_category`]).
//! - **Title**: override, else a placeholder from the shared pool. Empty or
//!   whitespace-only override text counts as absent.
//! - **Description**: override, else a placeholder keyed by the resolved
//!   category. Same empty-text rule.
//! - **likes / saves**: drawn from the documented cosmetic ranges.
//!
//! Construction is total: no filename is rejected, an empty input list
//! yields an empty catalog, and there is no error path.
//!
//! ## Queries
//!
//! [`Catalog::all`] and [`Catalog::by_category`] both preserve construction
//! order. Items are never re-sorted by likes, saves, or anything else.

use crate::cosmetic::{self, CosmeticSource};
use crate::types::{Category, Filter, GalleryItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Partial per-filename override for catalog construction.
///
/// Sparse on purpose: supply just the fields you want, the rest are
/// auto-generated. Unknown keys are rejected to catch typos early.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
}

/// Keyword table for filename-based category detection, in precedence order.
/// First group with a hit wins; no hit falls back to abstract.
const CATEGORY_KEYWORDS: [(Category, &[&str]); 3] = [
    (
        Category::Portraits,
        &["spider", "character", "portrait", "face"],
    ),
    (
        Category::Architecture,
        &["architecture", "building", "structure"],
    ),
    (Category::Nature, &["nature", "landscape", "tree", "forest"]),
];

/// Detect a category from keywords in the filename.
///
/// Case-insensitive substring match against the precedence table above.
/// Abstract is the default fallback, not a failure.
pub fn detect_category(filename: &str) -> Category {
    let name = filename.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| name.contains(kw)) {
            return category;
        }
    }
    Category::Abstract
}

/// Resolve an override text field: trimmed, with empty and whitespace-only
/// values treated as absent so they fall back to a placeholder. Items always
/// end up with a non-empty title and description.
fn resolve_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// The fixed, ordered set of gallery items.
///
/// Immutable after construction; any number of readers can share it.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    items: Vec<GalleryItem>,
}

impl Catalog {
    /// Build a catalog from a filename list and an override table.
    ///
    /// `photo_dir` is the relative directory prefixed onto each filename to
    /// form `image_path`. `cosmetics` supplies every decorative choice; the
    /// per-item draw order (title, description, likes, saves) is fixed so a
    /// given source state always produces the same catalog.
    pub fn build(
        filenames: &[String],
        overrides: &BTreeMap<String, ItemOverride>,
        photo_dir: &str,
        cosmetics: &mut dyn CosmeticSource,
    ) -> Catalog {
        let items = filenames
            .iter()
            .enumerate()
            .map(|(index, filename)| {
                let custom = overrides.get(filename);

                let category = custom
                    .and_then(|c| c.category)
                    .unwrap_or_else(|| detect_category(filename));
                let title = resolve_text(custom.and_then(|c| c.title.as_deref()))
                    .unwrap_or_else(|| cosmetic::placeholder_title(cosmetics));
                let description = resolve_text(custom.and_then(|c| c.description.as_deref()))
                    .unwrap_or_else(|| cosmetic::placeholder_description(category, cosmetics));

                GalleryItem {
                    id: index as u32 + 1,
                    title,
                    category,
                    image_path: format!("{photo_dir}/{filename}"),
                    description,
                    likes: cosmetic::likes(cosmetics),
                    saves: cosmetic::saves(cosmetics),
                }
            })
            .collect();

        Catalog { items }
    }

    /// Full catalog in construction order.
    pub fn all(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Order-preserving subsequence of items passing the filter.
    ///
    /// `Filter::All` (including anything that parsed as it) returns the
    /// full catalog.
    pub fn by_category(&self, filter: Filter) -> Vec<&GalleryItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }

    /// Number of items matching each category, in display order.
    ///
    /// Used by CLI inventory output and the preview page chips.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&cat| {
                let count = self
                    .items
                    .iter()
                    .filter(|item| item.category == cat)
                    .count();
                (cat, count)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
