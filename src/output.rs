//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every item is its
//! semantic identity — id, title, category — with the image path shown as
//! secondary context via an indented `Source:` line.
//!
//! ```text
//! Catalog (10 items)
//! 001 Spider-Man Tech Suit [portraits]
//!     Source: photos/spider-man-red-logo.jpg
//!     A high-tech interpretation of the iconic Spider-Man suit...
//! ...
//!
//! Categories
//!     portraits: 2
//!     abstract: 8
//!     nature: 0
//!     architecture: 0
//! ```
//!
//! Each surface has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::catalog::Catalog;
use crate::types::GalleryItem;
use crate::view::PageSlice;

const DESC_PREVIEW_LEN: usize = 64;

/// Format a 1-based id as 3-digit zero-padded.
fn format_index(id: u32) -> String {
    format!("{id:0>3}")
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Header line for one item: id, title, category tag.
fn item_header(item: &GalleryItem) -> String {
    format!("{} {} [{}]", format_index(item.id), item.title, item.category)
}

/// Format a count with a pluralized noun: "1 item", "3 items".
fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

/// Format the full catalog inventory: every item plus category counts.
pub fn format_catalog(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Catalog ({})", count_noun(catalog.len(), "item")));

    for item in catalog.all() {
        lines.push(item_header(item));
        lines.push(format!("{}Source: {}", indent(1), item.image_path));
        lines.push(format!(
            "{}{}",
            indent(1),
            truncate_desc(&item.description, DESC_PREVIEW_LEN)
        ));
    }

    lines.push(String::new());
    lines.push("Categories".to_string());
    for (category, count) in catalog.category_counts() {
        lines.push(format!("{}{}: {}", indent(1), category, count));
    }

    lines
}

/// Format one materialized page from the view pipeline.
pub fn format_page(page_number: usize, page: &PageSlice) -> Vec<String> {
    let suffix = if page.more_available {
        ", more available"
    } else {
        ""
    };
    let mut lines = vec![format!(
        "Page {} ({}{})",
        page_number,
        count_noun(page.items.len(), "item"),
        suffix
    )];
    for item in &page.items {
        lines.push(format!("{}{}", indent(1), item_header(item)));
    }
    lines
}

pub fn print_catalog(catalog: &Catalog) {
    for line in format_catalog(catalog) {
        println!("{line}");
    }
}

pub fn print_page(page_number: usize, page: &PageSlice) {
    for line in format_page(page_number, page) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::cosmetic::stub::FirstChoice;
    use crate::types::Filter;
    use crate::view::ViewState;
    use std::collections::BTreeMap;

    fn sample_catalog() -> Catalog {
        let filenames: Vec<String> = vec![
            "spider-man.jpg".to_string(),
            "blob.jpg".to_string(),
            "forest.jpg".to_string(),
        ];
        Catalog::build(&filenames, &BTreeMap::new(), "photos", &mut FirstChoice)
    }

    #[test]
    fn catalog_header_counts_items() {
        let lines = format_catalog(&sample_catalog());
        assert_eq!(lines[0], "Catalog (3 items)");
    }

    #[test]
    fn item_lines_show_id_title_and_category() {
        let lines = format_catalog(&sample_catalog());
        assert_eq!(lines[1], "001 Digital Masterpiece [portraits]");
        assert_eq!(lines[2], "    Source: photos/spider-man.jpg");
    }

    #[test]
    fn category_counts_follow_item_listing() {
        let lines = format_catalog(&sample_catalog());
        let idx = lines.iter().position(|l| l == "Categories").unwrap();
        assert_eq!(lines[idx + 1], "    portraits: 1");
        assert_eq!(lines[idx + 2], "    abstract: 1");
        assert_eq!(lines[idx + 3], "    nature: 1");
        assert_eq!(lines[idx + 4], "    architecture: 0");
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let lines = format_catalog(&sample_catalog());
        // Every placeholder description is longer than the preview cap.
        assert!(lines[3].ends_with("..."));
        assert!(lines[3].len() <= DESC_PREVIEW_LEN + 4 + 3);
    }

    #[test]
    fn page_format_reports_more_available() {
        let catalog = sample_catalog();
        let mut state = ViewState::new(2);
        let page = state.apply_filter(&catalog, Filter::All);
        let lines = format_page(1, &page);
        assert_eq!(lines[0], "Page 1 (2 items, more available)");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn final_page_omits_more_suffix() {
        let catalog = sample_catalog();
        let mut state = ViewState::new(2);
        state.apply_filter(&catalog, Filter::All);
        let page = state.load_more(&catalog);
        let lines = format_page(2, &page);
        assert_eq!(lines[0], "Page 2 (1 item)");
    }

    #[test]
    fn single_item_catalog_header_is_singular() {
        let filenames = vec!["solo.jpg".to_string()];
        let catalog = Catalog::build(&filenames, &BTreeMap::new(), "photos", &mut FirstChoice);
        let lines = format_catalog(&catalog);
        assert_eq!(lines[0], "Catalog (1 item)");
    }
}
