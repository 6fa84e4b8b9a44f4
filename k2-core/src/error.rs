//! Error taxonomy for K2 Connect operations

use crate::ApiResponse;
use k2_http::GatewayError;
use k2_validation::ValidationError;
use thiserror::Error;

/// Recoverable failures. Every variant is reported to callers as an
/// [`ApiResponse::Error`] rather than propagated.
#[derive(Error, Debug)]
pub enum K2Error {
    /// Missing or invalid parameter, detected before any network call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network, connection or non-2xx failure
    #[error("{0}")]
    Transport(String),

    /// Webhook signature did not match
    #[error("Invalid signature")]
    Signature,

    /// Webhook body was not a usable payload
    #[error("Malformed webhook payload: {0}")]
    MalformedPayload(String),

    /// No handler for the declared event type
    #[error("No handler registered for event type: {0}")]
    UnregisteredEvent(String),
}

impl From<GatewayError> for K2Error {
    fn from(err: GatewayError) -> Self {
        K2Error::Transport(err.to_string())
    }
}

impl From<K2Error> for ApiResponse {
    fn from(err: K2Error) -> Self {
        ApiResponse::Error(err.to_string())
    }
}

/// Result type for K2 operations
pub type K2Result<T> = Result<T, K2Error>;

/// Integrator misuse of the API.
///
/// Unlike [`K2Error`], this is never folded into an [`ApiResponse`]; it
/// signals a programming error at the call site.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// A required argument was never supplied
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
}
