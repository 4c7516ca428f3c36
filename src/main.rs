use clap::{Parser, Subcommand};
use masonry_gal::{config, output, render, types::Filter, view::ViewState};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "masonry-gal")]
#[command(about = "Catalog engine for masonry-style photo portfolios")]
#[command(long_about = "\
Catalog engine for masonry-style photo portfolios

gallery.toml is the data source: a photo filename list becomes an ordered
catalog, categories are auto-detected from filename keywords (overridable
per photo), and the view pipeline answers filter + load-more queries over it.

Config structure:

  gallery.toml
  ├── title = \"Portfolio\"          # Site title
  ├── photos = [ ... ]             # Catalog, in display order
  ├── photo_dir = \"photos\"         # Prefix for image paths
  ├── page_size = 8                # Items per page
  ├── seed = 2024                  # Cosmetic generation seed
  └── [overrides.\"file.jpg\"]       # Pin title/description/category

Field resolution (first available wins):
  Category:    override → filename keywords → abstract
  Title:       override → placeholder pool
  Description: override → per-category placeholder pool

Run 'masonry-gal gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Gallery config file
    #[arg(long, default_value = "gallery.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the catalog and write its manifest
    Scan,
    /// Walk the view pipeline page by page for a filter
    Pages(PagesArgs),
    /// Run the full pipeline: scan → render the preview page
    Build,
    /// Validate config and catalog without writing anything
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct PagesArgs {
    /// Category filter; "all" or anything unrecognized shows everything
    #[arg(long, default_value = "all")]
    filter: String,
}

/// Catalog manifest written by `scan` and `build`.
#[derive(Serialize)]
struct Manifest<'a> {
    items: &'a [masonry_gal::types::GalleryItem],
    config: &'a config::GalleryConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let config = config::load_config(&cli.config)?;
            let catalog = config.build_catalog();
            write_manifest(&catalog, &config, &cli.output)?;
            output::print_catalog(&catalog);
        }
        Command::Pages(args) => {
            let config = config::load_config(&cli.config)?;
            let catalog = config.build_catalog();
            let filter = Filter::parse(&args.filter);

            let mut state = ViewState::new(config.page_size);
            let first = state.apply_filter(&catalog, filter);
            println!("Filter: {filter}");
            output::print_page(1, &first);

            let mut page_number = 1;
            loop {
                let page = state.load_more(&catalog);
                if page.items.is_empty() {
                    break;
                }
                page_number += 1;
                output::print_page(page_number, &page);
            }
        }
        Command::Build => {
            let config = config::load_config(&cli.config)?;
            let catalog = config.build_catalog();

            println!("==> Stage 1: Scanning {}", cli.config.display());
            write_manifest(&catalog, &config, &cli.output)?;
            output::print_catalog(&catalog);

            println!("==> Stage 2: Rendering → {}", cli.output.display());
            render::write_site(&catalog, &config.title, &cli.output)?;

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let config = config::load_config(&cli.config)?;
            let catalog = config.build_catalog();
            output::print_catalog(&catalog);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_manifest(
    catalog: &masonry_gal::catalog::Catalog,
    config: &config::GalleryConfig,
    output_dir: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output_dir)?;
    let manifest = Manifest {
        items: catalog.all(),
        config,
    };
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(output_dir.join("manifest.json"), json)?;
    Ok(())
}
