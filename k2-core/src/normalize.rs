//! Mapping gateway outcomes onto [`ApiResponse`].

use crate::{ApiResponse, K2Error};
use k2_http::{GatewayError, GatewayResponse};
use k2_validation::ValidationError;
use serde_json::Value;
use tracing::{debug, error};

/// Which part of a successful response carries the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Headers-only confirmation; the `Location` header is the result
    Location,
    /// The decoded JSON body is the result
    Body,
}

/// Normalize a gateway outcome into the uniform result.
pub fn normalize(
    outcome: Result<GatewayResponse, GatewayError>,
    shape: ResponseShape,
) -> ApiResponse {
    match outcome {
        Ok(response) if response.is_success() => {
            debug!(status = %response.status(), "Request succeeded");
            ApiResponse::Success(success_data(&response, shape))
        }
        Ok(response) => {
            let message = error_message(&response);
            error!(status = %response.status(), error = %message, "Request rejected upstream");
            ApiResponse::Error(message)
        }
        Err(err) => {
            error!(error = %err, "Transport failure");
            K2Error::from(err).into()
        }
    }
}

/// Normalize a validation failure. Never reaches the network.
pub fn validation_failed(err: ValidationError) -> ApiResponse {
    debug!(field = %err.field, "Validation failed");
    K2Error::Validation(err).into()
}

fn success_data(response: &GatewayResponse, shape: ResponseShape) -> Value {
    if shape == ResponseShape::Location
        && let Some(location) = response.location()
    {
        return serde_json::json!({ "location": location });
    }

    if response.is_body_empty() {
        return Value::Object(Default::default());
    }

    response
        .json::<Value>()
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(response.bytes()).into_owned()))
}

/// Derive a message from a non-2xx response.
///
/// Prefers the provider's `error_message`, then the raw body, then the status.
fn error_message(response: &GatewayResponse) -> String {
    if let Ok(body) = response.json::<Value>()
        && let Some(message) = body.get("error_message").and_then(Value::as_str)
    {
        return message.to_string();
    }

    if !response.is_body_empty() {
        return String::from_utf8_lossy(response.bytes()).trim().to_string();
    }

    format!("HTTP {}", response.status().as_u16())
}
