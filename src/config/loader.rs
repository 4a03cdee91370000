//! Table and configuration loading.
//!
//! This module provides the [`TableLoader`] type for turning YAML or JSON
//! text (from a string, a local file, or a URL) into a validated
//! [`RateTable`].

use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::{RateError, RateResult};
use crate::models::RateRecord;
use crate::table::RateTable;

use super::types::SourceConfig;

const INLINE_SOURCE: &str = "<inline>";

/// Loads rate tables from text, files and URLs.
///
/// A table document is a list of rate records:
///
/// ```text
/// - name: CPU SU Rate
///   type: Decimal
///   history:
///     - value: "0.013"
///       from: 2023-06
/// ```
///
/// # Example
///
/// ```no_run
/// use rate_table::config::TableLoader;
///
/// let table = TableLoader::load_from_file("./rates.yaml")?;
/// let value = table.get_value_at("CPU SU Rate", "2024-01", None)?;
/// println!("CPU SU Rate: {}", value);
/// # Ok::<(), rate_table::error::RateError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TableLoader;

impl TableLoader {
    /// Builds a table from YAML text.
    pub fn from_yaml_str(text: &str) -> RateResult<RateTable> {
        Self::parse_yaml(text, INLINE_SOURCE)
    }

    /// Builds a table from JSON text.
    pub fn from_json_str(text: &str) -> RateResult<RateTable> {
        Self::parse_json(text, INLINE_SOURCE)
    }

    /// Builds a table from a local file.
    ///
    /// Files ending in `.json` are parsed as JSON; anything else as YAML.
    ///
    /// # Errors
    ///
    /// - `SourceNotFound` if the file cannot be read
    /// - `SourceParse` if the text is not a list of rate records
    /// - any validation error from [`RateTable::build`]
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RateResult<RateTable> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RateError::SourceNotFound {
            path: path_str.clone(),
        })?;

        let table = if path.extension().is_some_and(|ext| ext == "json") {
            Self::parse_json(&content, &path_str)?
        } else {
            Self::parse_yaml(&content, &path_str)?
        };

        info!(path = %path_str, rates = table.len(), "Loaded rate table from file");
        Ok(table)
    }

    /// Fetches a YAML table over HTTP and builds it.
    ///
    /// # Errors
    ///
    /// - `Fetch` on transport failure, timeout, or a non-success status
    /// - `SourceParse` or any validation error once the body is received
    pub async fn load_from_url(url: &str, timeout: Duration) -> RateResult<RateTable> {
        let fetch_error = |message: String| RateError::Fetch {
            url: url.to_string(),
            message,
        };

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| fetch_error(e.to_string()))?;

        let response = client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(url = %url, error = %e, "Rate table fetch failed");
                fetch_error(e.to_string())
            })?;

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let table = Self::parse_yaml(&body, url)?;
        info!(url = %url, rates = table.len(), "Loaded rate table from URL");
        Ok(table)
    }

    /// Fetches the table named by `config`.
    pub async fn load(config: &SourceConfig) -> RateResult<RateTable> {
        Self::load_from_url(&config.source_url, config.timeout()).await
    }

    /// Fetches the published default table.
    pub async fn load_default() -> RateResult<RateTable> {
        Self::load(&SourceConfig::default()).await
    }

    /// Reads a [`SourceConfig`] from a YAML file.
    pub fn load_config<P: AsRef<Path>>(path: P) -> RateResult<SourceConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RateError::SourceNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RateError::SourceParse {
            source_name: path_str,
            message: e.to_string(),
        })
    }

    fn parse_yaml(text: &str, source_name: &str) -> RateResult<RateTable> {
        let records: Vec<RateRecord> =
            serde_yaml::from_str(text).map_err(|e| RateError::SourceParse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        RateTable::build(records)
    }

    fn parse_json(text: &str, source_name: &str) -> RateResult<RateTable> {
        let records: Vec<RateRecord> =
            serde_json::from_str(text).map_err(|e| RateError::SourceParse {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        RateTable::build(records)
    }
}
