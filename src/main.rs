use anyhow::Result;
use clap::Parser;
use vintry::cli::{Cli, Commands};
use vintry::commands::browse::{browse, BrowseConfig};
use vintry::commands::facets::{facets, FacetsConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Browse {
            location,
            search,
            countries,
            wine_types,
            sort,
            format,
            output,
            all,
        } => {
            let config = BrowseConfig {
                location,
                search,
                countries,
                wine_types,
                sort,
                format,
                output,
                all,
            };
            browse(config)
        }
        Commands::Facets {
            location,
            format,
            output,
        } => {
            let config = FacetsConfig {
                location,
                format,
                output,
            };
            facets(config)
        }
    }
}
