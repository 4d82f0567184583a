//! Core error types for the Patro API.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while interpreting upstream payloads.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The upstream value was not the object the normalizer expects.
    #[error("Unexpected upstream payload shape: expected an object, got {0}")]
    Shape(&'static str),

    /// The requested sunsign is not present in the horoscope payload.
    #[error("No prediction found for sign '{sign}'")]
    SignNotFound { sign: String },
}
