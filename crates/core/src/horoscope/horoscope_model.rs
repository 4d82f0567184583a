//! Horoscope domain models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One sunsign's prediction as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HoroscopeEntry {
    pub sunsign: String,
    pub prediction: Value,
    /// Period label echoed from the request path; only set on single-sign lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}
