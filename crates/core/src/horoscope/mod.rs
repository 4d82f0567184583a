//! Horoscope (rashifal) module - models and normalization.

mod horoscope_model;
mod horoscope_normalizer;

pub use horoscope_model::HoroscopeEntry;
pub use horoscope_normalizer::{normalize_horoscope_all, normalize_horoscope_one};
