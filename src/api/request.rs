//! Request types for the rate query API.

use serde::{Deserialize, Serialize};

use crate::error::RateResult;
use crate::models::ValueType;

/// Type parameter value that asks for the raw, undecoded string.
pub const UNTYPED: &str = "untyped";

/// Query string for `GET /rates/{name}/value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueQuery {
    /// The as-of month, `YYYY-MM`.
    pub date: String,
    /// The expected type tag; omitted or `untyped` means raw.
    #[serde(rename = "type", default)]
    pub value_type: Option<String>,
}

impl ValueQuery {
    /// Resolves the requested type tag.
    pub fn expected_type(&self) -> RateResult<Option<ValueType>> {
        match self.value_type.as_deref() {
            None | Some(UNTYPED) => Ok(None),
            Some(tag) => tag.parse().map(Some),
        }
    }
}
