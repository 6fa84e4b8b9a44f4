//! Gateway error types.

use std::time::Duration;
use thiserror::Error;

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Failures raised by an [`HttpGateway`](crate::HttpGateway) before a response is available.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Underlying HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl GatewayError {
    /// Check if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_)) || matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Check if this is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_)) || matches!(self, Self::Http(e) if e.is_connect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert!(GatewayError::Timeout(Duration::from_secs(5)).is_timeout());
        assert!(GatewayError::Connection("refused".into()).is_connection());
        assert!(!GatewayError::InvalidUrl("nope".into()).is_connection());
    }

    #[test]
    fn test_display() {
        let err = GatewayError::Connection("Error Communicating with Server".into());
        assert_eq!(
            err.to_string(),
            "Connection error: Error Communicating with Server"
        );
    }
}
