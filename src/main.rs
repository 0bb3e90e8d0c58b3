use clap::Parser;
use equip_quote::{catalog, cli, config, error, export, picker, search, session};

use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Inspect { catalog: path } => {
            println!("📒 equip-quote - catalog inspection\n");

            let path = path.unwrap_or_else(|| config.catalog_path.clone());
            let catalog = catalog::load_catalog(&path, &config)?;

            println!("✔ {} rows loaded from {}\n", catalog.rows.len(), path.display());
            println!("Columns:");
            for column in &catalog.columns {
                println!("  - {}", column);
            }
        }

        Commands::Search { query, catalog: path, limit } => {
            let path = path.unwrap_or_else(|| config.catalog_path.clone());
            let catalog = catalog::load_catalog(&path, &config)?;

            let hits = search::filter_rows(&catalog, &query);
            println!("🔍 {} hit(s) for \"{}\"\n", hits.len(), query.trim());

            let shown = limit.unwrap_or(hits.len());
            for row in hits.iter().take(shown) {
                let name = catalog.item_name(row).unwrap_or_else(|| "(unnamed)".into());
                match catalog.price_of(row) {
                    Some(price) => println!("  {} — {}", name, price),
                    None => println!("  {}", name),
                }
            }
            if hits.len() > shown {
                println!("  ... and {} more", hits.len() - shown);
            }
        }

        Commands::Pick { catalog: path, selections, output, widget } => {
            println!("🛒 equip-quote - picking session\n");

            let mut config = config;
            if let Some(widget) = widget {
                config.selection_widget = widget;
            }

            let path = path.unwrap_or_else(|| config.catalog_path.clone());
            let selections_path =
                selections.unwrap_or_else(|| config.selections_filename.clone());
            let output_path = output.unwrap_or_else(|| config.output_filename.clone());

            println!("[1/2] Loading catalog...");
            let catalog = catalog::load_catalog(&path, &config)?;
            println!("✔ {} rows loaded\n", catalog.rows.len());

            println!("[2/2] Starting session");
            picker::run_picker(&catalog, &config, &selections_path, &output_path)?;

            println!("\n✅ Session closed");
        }

        Commands::Export { selections, output } => {
            println!("📄 equip-quote - quote export\n");

            let selections_path =
                selections.unwrap_or_else(|| config.selections_filename.clone());
            let output_path = output.unwrap_or_else(|| config.output_filename.clone());

            let set = session::SelectionsFile::load(&selections_path)?;
            if set.is_empty() {
                println!("Selections file holds no items; nothing to export");
                return Ok(());
            }

            export::write_quote(&set, &output_path)?;
            println!("✔ quote saved: {}", output_path.display());

            if cli.verbose {
                for group in set.non_empty() {
                    println!("  {}: {} item(s)", group.category, group.items.len());
                }
            }

            println!("\n✅ Export finished");
        }

        Commands::Config { set_catalog, set_header_row, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_catalog {
                config.catalog_path = path;
                changed = true;
            }
            if let Some(row) = set_header_row {
                config.header_row = row;
                changed = true;
            }
            if changed {
                config.validate()?;
                config.save()?;
                println!("✔ configuration saved");
            }

            if show || !changed {
                println!("Configuration:");
                println!("  catalog: {}", config.catalog_path.display());
                println!("  header row: {}", config.header_row);
                println!("  name column: {}", config.name_column);
                println!("  price column: {}", config.price_column);
                println!("  categories: {}", config.categories.join(", "));
                println!("  output: {}", config.output_filename.display());
                println!("  widget: {}", config.selection_widget);
                println!("  persist on switch: {}", config.persist_on_switch);
                println!("  remove on uncheck: {}", config.remove_on_uncheck);
            }
        }
    }

    Ok(())
}
