// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod facets;
pub mod fetch;
pub mod filter;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod sort;
pub mod text;

// Re-export commonly used types
pub use crate::core::BottleRecord;

pub use crate::catalog::WINE_TYPES;

pub use crate::facets::{countries_present, wine_types_present, FacetSelection};

pub use crate::filter::{apply_filters, filter_by_facets, filter_by_search};

pub use crate::sort::{parse_vintage, sort_records, SortKey};

pub use crate::pipeline::{recompute, BrowseEvent, BrowseState};

pub use crate::normalize::{normalize, RawBottle, RawInventory};

pub use crate::fetch::{fetch_bottle_data, resolve_endpoint, FetchError, FetchSequence, Fetcher};

pub use crate::config::{get_config, VintryConfig};

pub use crate::output::{create_writer, BrowseReport, FacetsReport, OutputFormat, OutputWriter};
