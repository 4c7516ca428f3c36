//! Static preview page rendering.
//!
//! Renders the catalog as a single `index.html`: a row of category filter
//! chips (with per-category counts) above a masonry-style card grid. Each
//! card shows the image, title, category tag, and the cosmetic like/save
//! counters.
//!
//! The page is plain static HTML — the view pipeline's paging contract
//! lives in [`crate::view`], not in any script here. Cards carry a
//! `data-category` attribute so a stylesheet or progressive enhancement can
//! filter client-side, but nothing in this crate depends on that.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): compile-time
//! templates, type-safe interpolation, auto-escaped by default. The
//! stylesheet is embedded at compile time and inlined into the page, so the
//! output directory holds a single self-contained file (plus the photos the
//! user already has).

use crate::catalog::Catalog;
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");

/// Render the gallery page for a catalog.
pub fn render_gallery(catalog: &Catalog, site_title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site_title) }
                style { (maud::PreEscaped(CSS)) }
            }
            body {
                header.site-header {
                    h1 { (site_title) }
                    nav.filter-chips {
                        span.chip.chip-active { "all (" (catalog.len()) ")" }
                        @for (category, count) in catalog.category_counts() {
                            span.chip { (category) " (" (count) ")" }
                        }
                    }
                }
                main.masonry-grid {
                    @for item in catalog.all() {
                        figure.card data-category=(item.category) {
                            img src=(item.image_path) alt=(item.title) loading="lazy";
                            figcaption {
                                h2.card-title { (item.title) }
                                p.card-category { (item.category) }
                                p.card-description { (item.description) }
                                p.card-stats {
                                    span.stat { "♥ " (item.likes) }
                                    span.stat { "⚑ " (item.saves) }
                                }
                            }
                        }
                    }
                }
                @if catalog.is_empty() {
                    p.empty-note { "No photos yet. Add filenames to gallery.toml." }
                }
            }
        }
    }
}

/// Write the rendered page to `output_dir/index.html`.
pub fn write_site(catalog: &Catalog, site_title: &str, output_dir: &Path) -> Result<(), RenderError> {
    fs::create_dir_all(output_dir)?;
    let page = render_gallery(catalog, site_title);
    fs::write(output_dir.join("index.html"), page.into_string())?;
    Ok(())
}
