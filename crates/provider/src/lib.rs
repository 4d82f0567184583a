//! Patro Provider Crate
//!
//! Upstream data sources for the Patro API. A provider answers four
//! questions (today's date and time, the horoscope, gold prices, exchange
//! rates) with raw JSON objects. Shaping those objects for clients is the
//! job of `patro-core`, not of the provider.
//!
//! # Providers
//!
//! - [`HamroPatroProvider`] - scrapes the Hamro Patro website

pub mod errors;
pub mod provider;

pub use errors::ProviderError;
pub use provider::hamro_patro::HamroPatroProvider;
pub use provider::PatroProvider;
