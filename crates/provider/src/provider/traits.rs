//! Upstream provider trait definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ProviderError;

/// Source of the raw data behind every endpoint.
///
/// Each call is independent and should hit the upstream afresh. Results are
/// returned as loosely-typed JSON; the caller checks the shape.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use patro_provider::{PatroProvider, ProviderError};
/// use serde_json::{json, Value};
///
/// struct Fixed;
///
/// #[async_trait]
/// impl PatroProvider for Fixed {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_gold_prices(&self) -> Result<Value, ProviderError> {
///         Ok(json!({"Fine Gold": 120000}))
///     }
///
///     // ... remaining fetches
/// }
/// ```
#[async_trait]
pub trait PatroProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Today's date and time. Returned to clients untouched.
    async fn fetch_date_time(&self) -> Result<Value, ProviderError>;

    /// Object of sunsign to prediction.
    async fn fetch_horoscope_all(&self) -> Result<Value, ProviderError>;

    /// Object of item label to price (scalar or `{price, ...}`), plus an
    /// optional `date`/`lastUpdated` stamp.
    async fn fetch_gold_prices(&self) -> Result<Value, ProviderError>;

    /// Object of currency code to `{buy, sell, ...}`, plus an optional
    /// `date`/`lastUpdated` stamp.
    async fn fetch_exchange_rates(&self) -> Result<Value, ProviderError>;
}
