use serde_json::{Map, Value};

use crate::constants::{CURRENCY_FIELD, PRICE_FIELD, RATE_FIELD};
use crate::payload::{EntryValue, UpstreamPayload};

use super::{Envelope, PriceEntry, RateEntry};

/// A row type that can be built from one non-metadata upstream entry.
pub trait KeyedEntry: Sized {
    fn from_entry(key: &str, value: EntryValue<'_>) -> Self;
}

impl KeyedEntry for PriceEntry {
    fn from_entry(key: &str, value: EntryValue<'_>) -> Self {
        let price = match value {
            EntryValue::Mapping(fields) => fields.get(PRICE_FIELD).cloned(),
            EntryValue::Scalar(scalar) => Some(scalar.clone()),
        };
        PriceEntry {
            kind: key.to_string(),
            price,
        }
    }
}

impl KeyedEntry for RateEntry {
    /// Nested fields are spread in as-is; a scalar becomes `{"rate": value}`.
    /// A nested `currency` field replaces the entry key as the currency.
    fn from_entry(key: &str, value: EntryValue<'_>) -> Self {
        let mut currency = Value::String(key.to_string());
        let fields = match value {
            EntryValue::Mapping(nested) => {
                let mut fields = Map::new();
                for (name, field) in nested {
                    if name == CURRENCY_FIELD {
                        currency = field.clone();
                    } else {
                        fields.insert(name.clone(), field.clone());
                    }
                }
                fields
            }
            EntryValue::Scalar(scalar) => {
                let mut fields = Map::new();
                fields.insert(RATE_FIELD.to_string(), scalar.clone());
                fields
            }
        };
        RateEntry { currency, fields }
    }
}

/// Drops the metadata keys, maps the remaining entries in order, and lifts
/// the freshness stamp into `lastUpdated`.
pub fn normalize_keyed_entries<T: KeyedEntry>(payload: &UpstreamPayload) -> Envelope<T> {
    let data = payload
        .data_entries()
        .map(|(key, value)| T::from_entry(key, EntryValue::classify(value)))
        .collect();

    Envelope {
        data,
        last_updated: payload.last_updated().cloned(),
    }
}

pub fn normalize_gold_prices(payload: &UpstreamPayload) -> Envelope<PriceEntry> {
    normalize_keyed_entries(payload)
}

pub fn normalize_exchange_rates(payload: &UpstreamPayload) -> Envelope<RateEntry> {
    normalize_keyed_entries(payload)
}
