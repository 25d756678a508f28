//! The `facets` command: list the facet values a location offers.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use crate::commands::{effective_location, load_inventory};
use crate::config::get_config;
use crate::output::{create_writer_to, FacetsReport, OutputFormat};
use crate::pipeline::{recompute, BrowseEvent, BrowseState};

#[derive(Debug, Clone)]
pub struct FacetsConfig {
    pub location: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn facets(config: FacetsConfig) -> Result<()> {
    let location = effective_location(get_config(), config.location.clone());
    let records = load_inventory(&location)?;
    let state = recompute(&BrowseState::new(), BrowseEvent::RecordsLoaded(records));

    let report = FacetsReport {
        location,
        generated_at: Utc::now(),
        countries: state.countries(),
        wine_types: state.wine_types(),
    };

    let mut writer = create_writer_to(config.format, config.output.as_deref())?;
    writer.write_facets(&report)
}
