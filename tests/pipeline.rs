//! End-to-end pipeline tests: config file → catalog → view pipeline → page.
//!
//! Exercises the same path the CLI takes, from a `gallery.toml` on disk to
//! rendered output, without going through the binary.

use masonry_gal::config::load_config;
use masonry_gal::render;
use masonry_gal::types::{Category, Filter};
use masonry_gal::view::ViewState;
use std::fs;
use tempfile::TempDir;

const GALLERY_TOML: &str = r#"
title = "Test Portfolio"
page_size = 8
seed = 42

photos = [
    "SaveClip.App_525973114.jpg",
    "SaveClip.App_524687279.jpg",
    "SaveClip.App_524424505.jpg",
    "SaveClip.App_521003233.jpg",
    "SaveClip.App_523946413.jpg",
    "SaveClip.App_524423493.jpg",
    "SaveClip.App_524427476.jpg",
    "SaveClip.App_524718160.jpg",
    "spider-man-red-logo.jpg",
    "spider-man-marvel.jpg",
]

[overrides."spider-man-red-logo.jpg"]
title = "Spider-Man Tech Suit"
description = "A high-tech interpretation of the iconic Spider-Man suit."
category = "portraits"

[overrides."spider-man-marvel.jpg"]
title = "Marvel Digital Universe"
description = "An epic digital representation of the Marvel universe."
category = "portraits"
"#;

fn setup() -> (TempDir, masonry_gal::config::GalleryConfig) {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("gallery.toml");
    fs::write(&config_path, GALLERY_TOML).unwrap();
    let config = load_config(&config_path).unwrap();
    (dir, config)
}

#[test]
fn catalog_from_config_has_sequential_ids() {
    let (_dir, config) = setup();
    let catalog = config.build_catalog();
    let ids: Vec<u32> = catalog.all().iter().map(|i| i.id).collect();
    let expected: Vec<u32> = (1..=10).collect();
    assert_eq!(ids, expected);
}

#[test]
fn overrides_land_on_the_right_items() {
    let (_dir, config) = setup();
    let catalog = config.build_catalog();

    let portraits: Vec<u32> = catalog
        .by_category(Filter::Category(Category::Portraits))
        .iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(portraits, vec![9, 10]);

    let tech_suit = &catalog.all()[8];
    assert_eq!(tech_suit.title, "Spider-Man Tech Suit");
    assert_eq!(tech_suit.category, Category::Portraits);

    // The eight unadorned uploads auto-categorize as abstract.
    let abstracts: Vec<u32> = catalog
        .by_category(Filter::Category(Category::Abstract))
        .iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(abstracts, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn full_page_walk_matches_contract() {
    let (_dir, config) = setup();
    let catalog = config.build_catalog();
    let mut state = ViewState::new(config.page_size);

    let first = state.apply_filter(&catalog, Filter::All);
    assert_eq!(first.items.len(), 8);
    assert!(first.more_available);

    let second = state.load_more(&catalog);
    let ids: Vec<u32> = second.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![9, 10]);
    assert!(!second.more_available);

    let third = state.load_more(&catalog);
    assert!(third.items.is_empty());
    assert_eq!(state.page_cursor(), 2);
}

#[test]
fn filter_switch_resets_pagination() {
    let (_dir, config) = setup();
    let catalog = config.build_catalog();
    let mut state = ViewState::new(config.page_size);

    state.apply_filter(&catalog, Filter::All);
    state.load_more(&catalog);

    let portraits = state.apply_filter(&catalog, Filter::Category(Category::Portraits));
    assert_eq!(state.page_cursor(), 1);
    assert_eq!(portraits.items.len(), 2);
    assert!(!portraits.more_available);
}

#[test]
fn same_seed_produces_identical_catalogs() {
    let (_dir, config) = setup();
    let a = config.build_catalog();
    let b = config.build_catalog();
    assert_eq!(a.all(), b.all());
}

#[test]
fn rendered_site_contains_catalog_items() {
    let (dir, config) = setup();
    let catalog = config.build_catalog();
    let out = dir.path().join("dist");

    render::write_site(&catalog, &config.title, &out).unwrap();

    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains("Test Portfolio"));
    assert!(html.contains("Spider-Man Tech Suit"));
    assert!(html.contains("photos/SaveClip.App_525973114.jpg"));
    assert!(html.contains("portraits (2)"));
}
