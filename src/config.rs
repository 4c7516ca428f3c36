//! Gallery configuration module.
//!
//! Handles loading and validating `gallery.toml`, the single data source for
//! the catalog. The photo list is the content; everything else is optional.
//!
//! ## Configuration Options
//!
//! ```toml
//! title = "Portfolio"   # Site title on the preview page
//!
//! # The catalog, in display order. One entry per file in the photo dir.
//! photos = [
//!     "misty-forest.jpg",
//!     "spider-man-red-logo.jpg",
//! ]
//!
//! photo_dir = "photos"   # Directory prefixed onto each filename
//! page_size = 8          # Items per page in the view pipeline
//! seed = 2024            # Seed for placeholder/counter generation
//!
//! # Optional per-filename overrides. Sparse: set only what you want,
//! # the rest is auto-generated.
//! [overrides."spider-man-red-logo.jpg"]
//! title = "Spider-Man Tech Suit"
//! description = "A high-tech interpretation of the iconic suit."
//! category = "portraits"   # portraits | abstract | nature | architecture
//! ```
//!
//! Unknown keys are rejected to catch typos early, and override keys that
//! don't name a listed photo fail validation for the same reason.

use crate::catalog::{Catalog, ItemOverride};
use crate::cosmetic::SeededCosmetics;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `gallery.toml`.
///
/// All fields except `photos` have defaults; a config file can be as short
/// as the photo list itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Site title, shown on the preview page.
    pub title: String,
    /// Photo filenames, in catalog order.
    pub photos: Vec<String>,
    /// Per-filename overrides for title/description/category.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, ItemOverride>,
    /// Directory prefixed onto each filename to form the image path.
    pub photo_dir: String,
    /// Items per page in the view pipeline.
    pub page_size: usize,
    /// Seed for the cosmetic source. Same seed, same manifest.
    pub seed: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            photos: Vec::new(),
            overrides: BTreeMap::new(),
            photo_dir: default_photo_dir(),
            page_size: default_page_size(),
            seed: default_seed(),
        }
    }
}

fn default_title() -> String {
    "Portfolio".to_string()
}

fn default_photo_dir() -> String {
    "photos".to_string()
}

fn default_page_size() -> usize {
    crate::view::DEFAULT_PAGE_SIZE
}

fn default_seed() -> u64 {
    2024
}

impl GalleryConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Validation(
                "page_size must be at least 1".into(),
            ));
        }
        let mut seen = BTreeSet::new();
        for photo in &self.photos {
            if photo.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "photos entries must not be empty".into(),
                ));
            }
            if !seen.insert(photo.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate photo entry: {photo}"
                )));
            }
        }
        for key in self.overrides.keys() {
            if !seen.contains(key.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "override for unknown photo: {key}"
                )));
            }
        }
        Ok(())
    }

    /// Build the catalog this config describes.
    ///
    /// Infallible by contract — validation catches config mistakes up
    /// front, construction itself has no failure path.
    pub fn build_catalog(&self) -> Catalog {
        let mut cosmetics = SeededCosmetics::new(self.seed);
        Catalog::build(&self.photos, &self.overrides, &self.photo_dir, &mut cosmetics)
    }
}

/// Load `gallery.toml` from the given path.
///
/// A missing file yields the (empty) default config, matching the catalog
/// contract that an empty photo list is valid, not an error.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    if !path.exists() {
        return Ok(GalleryConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: GalleryConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented stock `gallery.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> String {
    r#"# masonry-gal configuration
#
# The photo list is the catalog: one entry per file in the photo
# directory, in display order. Everything else is optional.

# Site title, shown on the preview page.
title = "Portfolio"

photos = [
    # "misty-forest.jpg",
    # "spider-man-red-logo.jpg",
]

# Directory prefixed onto each filename to form the image path.
photo_dir = "photos"

# Items per page in the gallery grid.
page_size = 8

# Seed for auto-generated titles, descriptions, and like/save counts.
# The same seed always produces the same manifest.
seed = 2024

# Per-photo overrides. Categories are auto-detected from filename
# keywords (spider/portrait/face, building/structure, tree/forest, ...)
# but you can pin any field explicitly:
#
# [overrides."spider-man-red-logo.jpg"]
# title = "Spider-Man Tech Suit"
# description = "A high-tech interpretation of the iconic suit."
# category = "portraits"   # portraits | abstract | nature | architecture
"#
    .to_string()
}
