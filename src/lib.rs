//! # Masonry Gal
//!
//! A catalog engine for masonry-style photo portfolios. Your config file is
//! the data source: a list of photo filenames becomes an ordered catalog,
//! categories are auto-detected from filename keywords, and a pure view
//! pipeline answers "which items are visible" for any filter + load-more
//! sequence.
//!
//! # Architecture: Catalog → View Pipeline
//!
//! Two components, composed linearly:
//!
//! ```text
//! 1. Catalog        gallery.toml  →  ordered, immutable GalleryItem list
//! 2. View Pipeline  (Catalog, ViewState, action)  →  visible item set
//! ```
//!
//! The catalog is built once and never mutated; the view pipeline only ever
//! reads from it. There is no dependency in the other direction, no shared
//! mutable state, and no failure path: every input space (category names,
//! filename lists, override tables) has a total, default-producing mapping.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Catalog construction, keyword auto-categorization, order-preserving queries |
//! | [`view`] | Filter → paginate pipeline: `apply_filter` (replace) and `load_more` (append) |
//! | [`cosmetic`] | Injectable source for placeholder text and like/save counters |
//! | [`config`] | `gallery.toml` loading, validation, and the stock config |
//! | [`types`] | Shared types serialized in the manifest (`GalleryItem`, `Category`, `Filter`) |
//! | [`render`] | Static preview page rendered with Maud |
//! | [`output`] | CLI output formatting — inventory and page-walk display |
//!
//! # Design Decisions
//!
//! ## Deterministic Cosmetics
//!
//! Items without an override get placeholder titles, descriptions, and
//! like/save counts. Those choices flow through the [`cosmetic::CosmeticSource`]
//! trait rather than ambient randomness: production uses a seeded SplitMix64
//! stream (seed in config), so the same config always produces the same
//! manifest and tests can assert exact output. The data-shaping logic —
//! category detection, filtering, pagination — is pure and takes no source
//! at all.
//!
//! ## Explicit View State
//!
//! The active filter and page cursor live in an explicit [`view::ViewState`]
//! value passed into each transition, not in globals shared across event
//! handlers. `apply_filter` and `load_more` are plain synchronous functions
//! over an in-memory sequence, testable without any presentation layer.
//!
//! ## Total Inputs, No Error Taxonomy
//!
//! Catalog construction and the view pipeline never fail. Unknown filter
//! strings degrade to "all", unmatched filenames categorize as abstract,
//! empty photo lists yield an empty catalog, and paging past the end is a
//! no-op. The only fallible surfaces are the config file (I/O, TOML) and
//! writing output, each with its own `thiserror` enum.
//!
//! ## Maud Over Template Engines
//!
//! The preview page is generated with [Maud](https://maud.lambda.xyz/):
//! compile-time checked HTML, type-safe interpolation, XSS-safe by default,
//! and no template directory to ship. The stylesheet is inlined, so the
//! output is a single self-contained `index.html` next to the photos.

pub mod catalog;
pub mod config;
pub mod cosmetic;
pub mod output;
pub mod render;
pub mod types;
pub mod view;
