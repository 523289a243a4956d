//! Error types for data operations.

use crate::alpha_vantage::Endpoint;
use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Outcome of a single report section: the payload, or the reason it could not be fetched.
pub type Section<T> = std::result::Result<T, FetchFailure>;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum DataError {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be parsed
    #[error("Data parsing error for {endpoint}: {source}")]
    Parse {
        /// Endpoint whose body failed to parse
        endpoint: Endpoint,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(String),
}

/// Recoverable failures. These are written into the report in place of the section body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The provider answered with a non-success status
    #[error("Failed to retrieve data from Alpha Vantage")]
    Status {
        /// Endpoint that was called
        endpoint: Endpoint,
        /// HTTP status code
        status: u16,
    },

    /// The response did not carry the expected payload key
    #[error("{}", .endpoint.missing_message())]
    MissingKey {
        /// Endpoint that was called
        endpoint: Endpoint,
        /// Notice the provider sent instead, if any
        notice: Option<String>,
    },
}

impl FetchFailure {
    /// Endpoint the failure belongs to.
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Status { endpoint, .. } | Self::MissingKey { endpoint, .. } => *endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_is_endpoint_independent() {
        for endpoint in Endpoint::ALL {
            let failure = FetchFailure::Status {
                endpoint,
                status: 503,
            };
            assert_eq!(
                failure.to_string(),
                "Failed to retrieve data from Alpha Vantage"
            );
            assert_eq!(failure.endpoint(), endpoint);
        }
    }

    #[test]
    fn test_missing_key_message_ignores_notice() {
        let failure = FetchFailure::MissingKey {
            endpoint: Endpoint::CashFlow,
            notice: Some("Thank you for using Alpha Vantage!".to_string()),
        };
        assert_eq!(
            failure.to_string(),
            "Failed to retrieve cash flow information"
        );
    }
}
