//! Application state for the rate query API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::table::RateTable;

/// Shared application state.
///
/// Holds the loaded table behind an `Arc`; the table is immutable, so
/// handlers read it concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate table.
    table: Arc<RateTable>,
}

impl AppState {
    /// Creates a new application state around a fully built table.
    pub fn new(table: RateTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Returns a reference to the rate table.
    pub fn table(&self) -> &RateTable {
        &self.table
    }
}
