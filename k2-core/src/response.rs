//! The two-shape result every public operation returns.

use serde::{Deserialize, Serialize};

/// Outcome of a public operation.
///
/// Serializes as `{"status": "success", "data": ...}` or
/// `{"status": "error", "data": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ApiResponse {
    /// The operation succeeded with decoded data
    Success(serde_json::Value),
    /// The operation failed with a human-readable message
    Error(String),
}

impl ApiResponse {
    /// Create a success result
    pub fn success(data: serde_json::Value) -> Self {
        Self::Success(data)
    }

    /// Create a success result with an empty object as data
    pub fn empty() -> Self {
        Self::Success(serde_json::Value::Object(Default::default()))
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Is this a success result
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Is this an error result
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The `status` tag: `"success"` or `"error"`
    pub fn status(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }

    /// Success data, if any
    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    /// Error message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(message) => Some(message.as_str()),
        }
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Success(data) => serde_json::json!({"status": "success", "data": data}),
            Self::Error(message) => serde_json::json!({"status": "error", "data": message}),
        }
    }
}
