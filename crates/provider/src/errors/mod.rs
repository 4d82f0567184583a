//! Error types for the provider crate.

use thiserror::Error;

/// Errors that can occur while fetching upstream data.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The HTTP request could not be completed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("Unexpected status {status} from {page} page")]
    Status {
        /// The page that was requested
        page: &'static str,
        /// HTTP status code returned
        status: u16,
    },

    /// The page was fetched but did not contain the expected content.
    #[error("Failed to parse {page} page: {message}")]
    Parse {
        /// The page being parsed
        page: &'static str,
        /// What was missing or malformed
        message: String,
    },

    /// The fetch did not finish in time.
    #[error("Timed out fetching {operation}")]
    Timeout {
        /// The provider operation that timed out
        operation: &'static str,
    },
}

impl ProviderError {
    pub(crate) fn parse(page: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            page,
            message: message.into(),
        }
    }

    /// Whether the failure came from the upstream being slow rather than broken.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Network(e) => e.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ProviderError::Status {
            page: "gold",
            status: 503,
        };
        assert_eq!(err.to_string(), "Unexpected status 503 from gold page");

        let err = ProviderError::parse("forex", "no rate rows");
        assert_eq!(err.to_string(), "Failed to parse forex page: no rate rows");
    }

    #[test]
    fn test_is_timeout() {
        assert!(ProviderError::Timeout {
            operation: "fetch_gold_prices"
        }
        .is_timeout());
        assert!(!ProviderError::parse("gold", "empty").is_timeout());
    }
}
