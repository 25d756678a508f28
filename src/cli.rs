use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::sort::SortKey;

#[derive(Parser, Debug)]
#[command(name = "vintry")]
#[command(about = "Wine cellar inventory browser", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a location's inventory, then filter and sort it
    Browse {
        /// Inventory location key (defaults to the configured one)
        #[arg(short, long)]
        location: Option<String>,

        /// Free-text search query
        #[arg(short, long, default_value = "")]
        search: String,

        /// Country facet value (repeat to select several)
        #[arg(long = "country", value_name = "NAME")]
        countries: Vec<String>,

        /// Wine-type facet value (repeat to select several)
        #[arg(long = "wine-type", value_name = "NAME")]
        wine_types: Vec<String>,

        /// Sort order
        #[arg(long, value_enum, default_value = "none")]
        sort: SortKey,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include out-of-stock bottles in the rendered rows
        #[arg(long)]
        all: bool,
    },

    /// List the facet values present in a location's inventory
    Facets {
        /// Inventory location key (defaults to the configured one)
        #[arg(short, long)]
        location: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
