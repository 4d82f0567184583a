//! Rates module - gold prices and exchange rates wrapped in an envelope.

mod rates_model;
mod rates_normalizer;

pub use rates_model::{Envelope, PriceEntry, RateEntry};
pub use rates_normalizer::{
    normalize_exchange_rates, normalize_gold_prices, normalize_keyed_entries, KeyedEntry,
};
