//! Upstream payload module - the raw provider object and its entry values.

mod payload_model;

pub use payload_model::{json_kind, EntryValue, UpstreamPayload};
