//! Patro Core - client-facing models and response normalization.
//!
//! Upstream data (horoscope text, gold prices, exchange rates) arrives as
//! loosely-shaped JSON objects. This crate owns the rules that turn those
//! objects into the stable shapes the HTTP API returns. Everything here is
//! pure: no I/O, no shared state.

pub mod constants;
pub mod errors;
pub mod horoscope;
pub mod payload;
pub mod rates;

pub use payload::{EntryValue, UpstreamPayload};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
