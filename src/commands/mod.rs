//! Command orchestration for the CLI binary.

pub mod browse;
pub mod facets;

use anyhow::{Context, Result};

use crate::config::{get_config, VintryConfig};
use crate::core::BottleRecord;
use crate::fetch::{resolve_endpoint, FetchError, Fetcher};

/// Pick the effective location: the flag if given, the configured
/// default otherwise.
pub(crate) fn effective_location(config: &VintryConfig, flag: Option<String>) -> String {
    flag.unwrap_or_else(|| config.default_location.clone())
}

/// Fetch a location's inventory, degrading to an empty record list on
/// fetch failure. An unknown location key is a hard error; it is a
/// caller mistake, not a feed outage.
pub(crate) fn load_inventory(location: &str) -> Result<Vec<BottleRecord>> {
    let config = get_config();
    let url = match resolve_endpoint(config, location) {
        Ok(url) => url,
        Err(FetchError::UnknownLocation(key)) => {
            let known: Vec<&str> = config.locations.keys().map(String::as_str).collect();
            anyhow::bail!("unknown location '{}' (known: {})", key, known.join(", "));
        }
        Err(err) => return Err(err.into()),
    };

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let fetcher = Fetcher::new();
    match runtime.block_on(fetcher.fetch(&url)) {
        Ok(Some(records)) => Ok(records),
        // Superseded by a newer fetch; nothing to apply.
        Ok(None) => Ok(Vec::new()),
        Err(err) => {
            log::warn!("fetch failed for '{location}': {err}; showing empty inventory");
            Ok(Vec::new())
        }
    }
}
