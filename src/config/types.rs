//! Configuration types for locating rate tables.

use std::time::Duration;

use serde::Deserialize;

/// Location of the published default rate table.
pub const DEFAULT_RATES_URL: &str =
    "https://raw.githubusercontent.com/CCI-MOC/nerc-rates/main/rates.yaml";

/// Default timeout for fetching a remote table, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where to fetch a rate table from.
///
/// Every field has a default, so an empty YAML document is a valid config.
///
/// ```yaml
/// source_url: https://example.org/rates.yaml
/// timeout_secs: 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL of the YAML rate table.
    pub source_url: String,
    /// Request timeout for the fetch, in seconds.
    pub timeout_secs: u64,
}

impl SourceConfig {
    /// Creates a config pointing at `source_url` with the default timeout.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Self::default()
        }
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_RATES_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
