//! Configuration: the location → endpoint map and the default location.
//!
//! Defaults are compiled in; an optional `.vintry.toml` in the working
//! directory extends or overrides them. Loaded once and cached for the
//! life of the process.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = ".vintry.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VintryConfig {
    /// Location key → inventory feed URL.
    #[serde(default = "default_locations")]
    pub locations: BTreeMap<String, String>,

    /// Location used when the CLI gets no `--location`.
    #[serde(default = "default_location")]
    pub default_location: String,
}

impl Default for VintryConfig {
    fn default() -> Self {
        Self {
            locations: default_locations(),
            default_location: default_location(),
        }
    }
}

impl VintryConfig {
    /// Endpoint URL for a location key, if configured.
    pub fn endpoint(&self, location: &str) -> Option<&str> {
        self.locations.get(location).map(String::as_str)
    }

    /// Parse a TOML document. File entries extend the compiled-in
    /// location map; a key collision overrides the default.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        #[derive(Deserialize)]
        struct FileConfig {
            #[serde(default)]
            locations: BTreeMap<String, String>,
            #[serde(default = "default_location")]
            default_location: String,
        }

        let file: FileConfig = toml::from_str(content)?;
        let mut locations = default_locations();
        locations.extend(file.locations);
        Ok(Self {
            locations,
            default_location: file.default_location,
        })
    }
}

fn default_locations() -> BTreeMap<String, String> {
    [
        (
            "fairfield",
            "https://mobile-api-dev.junglejims.com/fairfield-wine-cellar.json",
        ),
        (
            "eastgate",
            "https://mobile-api-dev.junglejims.com/eastgate-wine-cellar.json",
        ),
        (
            "github",
            "https://aaron.greider.org/wine-cellar-dashboard/dist/fairfield-wine.json",
        ),
    ]
    .into_iter()
    .map(|(key, url)| (key.to_string(), url.to_string()))
    .collect()
}

fn default_location() -> String {
    "fairfield".to_string()
}

fn load_config() -> VintryConfig {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return VintryConfig::default();
    }
    match fs::read_to_string(path).map_err(|e| e.to_string()).and_then(|content| {
        VintryConfig::from_toml_str(&content).map_err(|e| e.to_string())
    }) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring invalid {CONFIG_FILE}: {err}");
            VintryConfig::default()
        }
    }
}

static CONFIG: OnceLock<VintryConfig> = OnceLock::new();

/// Cached process-wide configuration.
pub fn get_config() -> &'static VintryConfig {
    CONFIG.get_or_init(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_known_locations() {
        let config = VintryConfig::default();
        assert!(config.endpoint("fairfield").is_some());
        assert!(config.endpoint("eastgate").is_some());
        assert!(config.endpoint("github").is_some());
        assert_eq!(config.default_location, "fairfield");
    }

    #[test]
    fn file_entries_extend_the_defaults() {
        let config = VintryConfig::from_toml_str(
            r#"
            [locations]
            cellar-door = "https://example.com/cellar.json"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.endpoint("cellar-door"),
            Some("https://example.com/cellar.json")
        );
        assert!(config.endpoint("fairfield").is_some());
    }

    #[test]
    fn file_entries_override_default_keys() {
        let config = VintryConfig::from_toml_str(
            r#"
            default_location = "eastgate"

            [locations]
            fairfield = "https://example.com/other.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint("fairfield"), Some("https://example.com/other.json"));
        assert_eq!(config.default_location, "eastgate");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(VintryConfig::from_toml_str("locations = 3").is_err());
    }
}
