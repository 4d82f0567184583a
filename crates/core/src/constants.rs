/// Upstream keys carrying freshness metadata rather than a price or rate.
///
/// Entries under these keys are never emitted as data rows.
pub const METADATA_KEYS: [&str; 2] = ["date", "lastUpdated"];

/// Field read from a nested gold entry to obtain its price.
pub const PRICE_FIELD: &str = "price";

/// Field a scalar exchange rate is wrapped under.
pub const RATE_FIELD: &str = "rate";

/// Field holding the currency code on a normalized exchange rate.
pub const CURRENCY_FIELD: &str = "currency";

pub fn is_metadata_key(key: &str) -> bool {
    METADATA_KEYS.contains(&key)
}
