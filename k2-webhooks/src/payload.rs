//! Inbound webhook payload types

use crate::EventType;
use chrono::{DateTime, FixedOffset};
use k2_core::{K2Error, K2Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// A verified inbound webhook.
///
/// Field names follow the provider's wire format exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Event identifier used for dispatch (e.g. "customer_created")
    pub topic: String,

    /// Unique identifier of this webhook event; `None` if absent or not a string
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    /// When the event was created; `None` if absent or not RFC 3339
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<FixedOffset>>,

    /// Event classification and data
    pub event: WebhookEvent,

    /// Related resource links
    #[serde(default, rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<serde_json::Value>,
}

/// The `event` object of a webhook payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Human-readable event type (e.g. "Customer Created")
    #[serde(rename = "type")]
    pub event_type: String,

    /// Arbitrary resource data
    #[serde(default)]
    pub resource: serde_json::Value,
}

impl WebhookPayload {
    /// Parse a raw body.
    ///
    /// The body must be a JSON object with a `topic` and an `event.type`.
    pub fn parse(raw: &[u8]) -> K2Result<Self> {
        let value: serde_json::Value =
            serde_json::from_slice(raw).map_err(|e| K2Error::MalformedPayload(e.to_string()))?;

        if !value.is_object() {
            return Err(K2Error::MalformedPayload(
                "expected a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|e| K2Error::MalformedPayload(e.to_string()))
    }

    /// The dispatch key
    pub fn event_type(&self) -> EventType {
        EventType::parse(&self.topic)
    }
}

/// Metadata is informational only: an unusable value is dropped rather than
/// rejecting an otherwise valid payload.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
