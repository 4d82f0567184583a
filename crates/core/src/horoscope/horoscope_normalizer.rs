use serde_json::Value;

use crate::errors::{Error, Result};
use crate::payload::UpstreamPayload;

use super::HoroscopeEntry;

/// Maps every `sign -> prediction` pair to an entry, keeping upstream order.
pub fn normalize_horoscope_all(payload: &UpstreamPayload) -> Vec<HoroscopeEntry> {
    payload
        .iter()
        .map(|(sign, prediction)| HoroscopeEntry {
            sunsign: sign.to_string(),
            prediction: prediction.clone(),
            span: None,
        })
        .collect()
}

/// Looks up a single sign and tags the result with the caller's `span`.
///
/// `span` is not validated. A sign whose prediction is `null` or an empty
/// string is treated as missing; other values, `0` and `false` included,
/// are returned as found.
pub fn normalize_horoscope_one(
    payload: &UpstreamPayload,
    sign: &str,
    span: &str,
) -> Result<HoroscopeEntry> {
    let prediction = payload
        .get(sign)
        .filter(|value| !is_blank(value))
        .ok_or_else(|| Error::SignNotFound {
            sign: sign.to_string(),
        })?;

    Ok(HoroscopeEntry {
        sunsign: sign.to_string(),
        prediction: prediction.clone(),
        span: Some(span.to_string()),
    })
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}
