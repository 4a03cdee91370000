//! Loading rate tables and their source configuration.
//!
//! This module turns YAML or JSON text, local files and remote URLs into
//! validated rate tables.
//!
//! # Example
//!
//! ```no_run
//! use rate_table::config::{SourceConfig, TableLoader};
//!
//! # async fn run() -> Result<(), rate_table::error::RateError> {
//! let table = TableLoader::load(&SourceConfig::default()).await?;
//! println!("Loaded {} rates", table.len());
//! # Ok(())
//! # }
//! ```

mod loader;
mod types;

pub use loader::TableLoader;
pub use types::{DEFAULT_RATES_URL, DEFAULT_TIMEOUT_SECS, SourceConfig};
