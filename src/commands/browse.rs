//! The `browse` command: fetch, filter, sort, render.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use crate::commands::{effective_location, load_inventory};
use crate::config::get_config;
use crate::core::BottleRecord;
use crate::output::{create_writer_to, BrowseReport, OutputFormat};
use crate::pipeline::{recompute, BrowseEvent, BrowseState};
use crate::sort::SortKey;

/// Options for one browse run, straight from the CLI.
#[derive(Debug, Clone)]
pub struct BrowseConfig {
    pub location: Option<String>,
    pub search: String,
    pub countries: Vec<String>,
    pub wine_types: Vec<String>,
    pub sort: SortKey,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub all: bool,
}

pub fn browse(config: BrowseConfig) -> Result<()> {
    let location = effective_location(get_config(), config.location.clone());
    let records = load_inventory(&location)?;

    let state = build_state(records, &config);
    let report = build_report(&state, &location, &config);

    let mut writer = create_writer_to(config.format, config.output.as_deref())?;
    writer.write_browse(&report)
}

/// Feed the CLI options through the event pipeline, one event per
/// input, the same way an interactive caller would.
fn build_state(records: Vec<BottleRecord>, config: &BrowseConfig) -> BrowseState {
    let mut state = recompute(&BrowseState::new(), BrowseEvent::RecordsLoaded(records));
    for wine_type in &config.wine_types {
        state = recompute(&state, BrowseEvent::WineTypeToggled(wine_type.clone()));
    }
    for country in &config.countries {
        state = recompute(&state, BrowseEvent::CountryToggled(country.clone()));
    }
    if !config.search.is_empty() {
        state = recompute(&state, BrowseEvent::SearchEdited(config.search.clone()));
    }
    if config.sort != SortKey::None {
        state = recompute(&state, BrowseEvent::SortChanged(config.sort));
    }
    state
}

fn build_report(state: &BrowseState, location: &str, config: &BrowseConfig) -> BrowseReport {
    let bottles = if config.all {
        state.visible().iter().cloned().collect()
    } else {
        state.in_stock().iter().cloned().collect()
    };
    BrowseReport {
        location: location.to_string(),
        generated_at: Utc::now(),
        search: config.search.clone(),
        selected_countries: state.selected_countries().iter().cloned().collect(),
        selected_wine_types: state.selected_wine_types().iter().cloned().collect(),
        sort: config.sort,
        result_count: state.result_count(),
        in_stock_count: state.in_stock_count(),
        bottles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BottleRecord;

    fn record(description: &str, country: &str, total: u32, price: f64) -> BottleRecord {
        BottleRecord {
            description: description.to_string(),
            vintage: "2019".to_string(),
            country: country.to_string(),
            region: String::new(),
            sub_region: String::new(),
            total_in_stock: total,
            retail_price: price,
        }
    }

    fn base_config() -> BrowseConfig {
        BrowseConfig {
            location: None,
            search: String::new(),
            countries: vec![],
            wine_types: vec![],
            sort: SortKey::None,
            format: OutputFormat::Json,
            output: None,
            all: false,
        }
    }

    #[test]
    fn report_counts_diverge_when_stock_is_missing() {
        let records = vec![
            record("Cabernet Reserve", "France", 3, 25.0),
            record("Old Red", "Chile", 0, 10.0),
        ];
        let config = base_config();
        let state = build_state(records, &config);
        let report = build_report(&state, "fairfield", &config);

        assert_eq!(report.result_count, 2);
        assert_eq!(report.in_stock_count, 1);
        assert_eq!(report.bottles.len(), 1);
    }

    #[test]
    fn all_flag_keeps_out_of_stock_rows() {
        let records = vec![record("Old Red", "Chile", 0, 10.0)];
        let config = BrowseConfig {
            all: true,
            ..base_config()
        };
        let state = build_state(records, &config);
        let report = build_report(&state, "fairfield", &config);
        assert_eq!(report.bottles.len(), 1);
    }

    #[test]
    fn cli_options_apply_in_pipeline_order() {
        let records = vec![
            record("Cabernet Reserve", "France", 3, 25.0),
            record("Cabernet Estate", "Chile", 2, 15.0),
            record("Dry Riesling", "Germany", 5, 18.0),
        ];
        let config = BrowseConfig {
            wine_types: vec!["Cabernet".to_string()],
            sort: SortKey::PriceAsc,
            ..base_config()
        };
        let state = build_state(records, &config);
        let names: Vec<&str> =
            state.visible().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(names, vec!["Cabernet Estate", "Cabernet Reserve"]);
    }
}
