//! Thin client for the inventory feed.
//!
//! This is the only asynchronous boundary in the crate: one GET per
//! location, expecting a JSON body shaped `{ "wines": [...] }`. A
//! non-success status, transport failure, or unexpected body yields a
//! [`FetchError`]; callers recover by degrading to an empty inventory.
//!
//! [`Fetcher`] also guards against a fetch being superseded: when the
//! user switches location before the first response lands, the stale
//! response is dropped rather than applied (last fetch wins).

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::VintryConfig;
use crate::core::BottleRecord;
use crate::normalize::{normalize, RawInventory};

/// Errors produced while resolving or fetching an inventory feed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No endpoint is configured for the requested location key.
    #[error("unknown location '{0}': not in the configured location map")]
    UnknownLocation(String),

    /// Transport/HTTP client error.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-successful HTTP status from the feed.
    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
    },

    /// The body was not the expected `{ "wines": [...] }` shape.
    #[error("failed to decode inventory body: {0}")]
    Decode(String),
}

/// Resolve a location key to its endpoint URL through the config map.
pub fn resolve_endpoint(config: &VintryConfig, location: &str) -> Result<String, FetchError> {
    config
        .endpoint(location)
        .map(str::to_string)
        .ok_or_else(|| FetchError::UnknownLocation(location.to_string()))
}

/// GET one inventory endpoint and normalize its records.
pub async fn fetch_bottle_data(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<BottleRecord>, FetchError> {
    log::debug!("fetching inventory from {url}");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status,
            url: url.to_string(),
        });
    }
    let payload: RawInventory = response
        .json()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))?;
    let records = normalize(payload);
    log::info!("fetched {} records from {url}", records.len());
    Ok(records)
}

/// Monotonic ticket counter implementing last-fetch-wins.
///
/// Every fetch takes a ticket before starting; a completed fetch may
/// only be applied while its ticket is still the newest one issued.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: AtomicU64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new fetch and return its ticket.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` still belongs to the newest fetch.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

/// An HTTP client paired with a [`FetchSequence`].
#[derive(Debug, Default)]
pub struct Fetcher {
    client: reqwest::Client,
    sequence: FetchSequence,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch one endpoint. Returns `Ok(None)` when a newer fetch began
    /// while this one was in flight; the stale records must not be
    /// applied.
    pub async fn fetch(&self, url: &str) -> Result<Option<Vec<BottleRecord>>, FetchError> {
        let ticket = self.sequence.begin();
        let records = fetch_bottle_data(&self.client, url).await?;
        if self.sequence.is_current(ticket) {
            Ok(Some(records))
        } else {
            log::debug!("discarding superseded fetch of {url}");
            Ok(None)
        }
    }
}
