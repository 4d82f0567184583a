//! Client-facing price and rate models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single gold/silver price row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceEntry {
    #[serde(rename = "type")]
    pub kind: String,
    /// Absent when the upstream row was an object without a `price` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
}

/// A single currency's rates, with the upstream fields spread alongside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateEntry {
    /// The upstream key, unless the nested rates carry their own `currency`.
    pub currency: Value,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Wrapper returned by the gold and forex endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Value>,
}
