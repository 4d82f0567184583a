//! Raw upstream payload as returned by a provider.

use serde_json::{Map, Value};

use crate::constants::is_metadata_key;
use crate::errors::Error;

/// An upstream object: string keys to JSON values, in upstream order.
///
/// Built once per request from whatever the provider returned and only ever
/// read by the normalizers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpstreamPayload(Map<String, Value>);

impl UpstreamPayload {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All entries, in upstream order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Entries that carry data, skipping the freshness metadata keys.
    pub fn data_entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.iter().filter(|(key, _)| !is_metadata_key(key))
    }

    /// Freshness stamp: `date` when present, otherwise `lastUpdated`.
    ///
    /// A key holding `null` counts as absent.
    pub fn last_updated(&self) -> Option<&Value> {
        self.present("date").or_else(|| self.present("lastUpdated"))
    }

    fn present(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }
}

impl From<Map<String, Value>> for UpstreamPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for UpstreamPayload {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::Shape(json_kind(&other))),
        }
    }
}

/// Shape of a single entry value, decided before any per-domain mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryValue<'a> {
    /// A nested object, e.g. `{"price": 120000, "unit": "tola"}`.
    Mapping(&'a Map<String, Value>),
    /// Anything else, `null` included.
    Scalar(&'a Value),
}

impl<'a> EntryValue<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => EntryValue::Mapping(map),
            other => EntryValue::Scalar(other),
        }
    }
}

/// Human-readable name of a JSON value's type, used in shape errors.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
