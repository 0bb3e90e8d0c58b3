use crate::config::SelectionWidget;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "equip-quote")]
#[command(about = "Equipment catalog search and grouped quote export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the catalog and print its columns
    Inspect {
        /// Catalog spreadsheet (default: configured path)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// One-shot search over the catalog
    Search {
        /// Substring to look for in any column
        #[arg(required = true)]
        query: String,

        /// Catalog spreadsheet (default: configured path)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Show at most this many hits
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Interactive picking session
    Pick {
        /// Catalog spreadsheet (default: configured path)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Selections file written by the session
        #[arg(short, long)]
        selections: Option<PathBuf>,

        /// Quote output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Picker widget (checkbox/grid)
        #[arg(short, long)]
        widget: Option<SelectionWidget>,
    },

    /// Export a selections file to a quote spreadsheet
    Export {
        /// Selections file (default: configured path)
        #[arg(short, long)]
        selections: Option<PathBuf>,

        /// Quote output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or edit the configuration
    Config {
        /// Set the catalog path
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set the 1-based header row
        #[arg(long)]
        set_header_row: Option<u32>,

        /// Show the configuration
        #[arg(long)]
        show: bool,
    },
}
