//! Per-operation parameters
//!
//! Field names deserialize from camelCase so loosely built JSON maps can be
//! converted directly. Every field is optional at the type level; the
//! [`Validate`] impls decide what an operation actually needs.

use k2_validation::{FieldChecks, Validate, ValidationError};
use serde::{Deserialize, Serialize};

/// Parameters for [`PollingService::poll_transactions`](crate::PollingService::poll_transactions)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollTransactionsRequest {
    pub from_time: Option<String>,
    pub to_time: Option<String>,
    pub scope: Option<String>,
    pub scope_reference: Option<String>,
    pub callback_url: Option<String>,
    pub access_token: Option<String>,
}

impl Validate for PollTransactionsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("fromTime", self.from_time.as_deref())
            .required("toTime", self.to_time.as_deref())
            .required("scope", self.scope.as_deref())
            .scope_reference(
                "scopeReference",
                self.scope.as_deref(),
                self.scope_reference.as_deref(),
            )
            .required("callbackUrl", self.callback_url.as_deref())
            .required("accessToken", self.access_token.as_deref())
            .header_safe("accessToken", self.access_token.as_deref())
            .finish()
    }
}

/// Parameters for [`PollingService::get_status`](crate::PollingService::get_status)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    pub location: Option<String>,
    pub access_token: Option<String>,
}

impl Validate for StatusRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("location", self.location.as_deref())
            .required("accessToken", self.access_token.as_deref())
            .header_safe("accessToken", self.access_token.as_deref())
            .finish()
    }
}

/// Parameters for [`WebhookService::subscribe`](crate::WebhookService::subscribe)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    pub event_type: Option<String>,
    pub url: Option<String>,
    pub access_token: Option<String>,
    pub scope: Option<String>,
    pub scope_reference: Option<String>,
}

impl Validate for SubscribeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("eventType", self.event_type.as_deref())
            .required("url", self.url.as_deref())
            .required("accessToken", self.access_token.as_deref())
            .header_safe("accessToken", self.access_token.as_deref())
            .required("scope", self.scope.as_deref())
            .scope_reference(
                "scopeReference",
                self.scope.as_deref(),
                self.scope_reference.as_deref(),
            )
            .finish()
    }
}

/// `POST api/v1/polling` body
#[derive(Debug, Serialize)]
pub(crate) struct PollingBody<'a> {
    scope: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope_reference: Option<&'a str>,
    from_time: &'a str,
    to_time: &'a str,
    #[serde(rename = "_links")]
    links: CallbackLinks<'a>,
}

#[derive(Debug, Serialize)]
struct CallbackLinks<'a> {
    callback_url: &'a str,
}

impl<'a> PollingBody<'a> {
    pub(crate) fn new(params: &'a PollTransactionsRequest) -> Self {
        Self {
            scope: params.scope.as_deref().unwrap_or_default(),
            scope_reference: present(params.scope_reference.as_deref()),
            from_time: params.from_time.as_deref().unwrap_or_default(),
            to_time: params.to_time.as_deref().unwrap_or_default(),
            links: CallbackLinks {
                callback_url: params.callback_url.as_deref().unwrap_or_default(),
            },
        }
    }
}

/// `POST api/v1/webhook_subscriptions` body
#[derive(Debug, Serialize)]
pub(crate) struct SubscriptionBody<'a> {
    event_type: &'a str,
    url: &'a str,
    scope: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope_reference: Option<&'a str>,
}

impl<'a> SubscriptionBody<'a> {
    pub(crate) fn new(params: &'a SubscribeRequest) -> Self {
        Self {
            event_type: params.event_type.as_deref().unwrap_or_default(),
            url: params.url.as_deref().unwrap_or_default(),
            scope: params.scope.as_deref().unwrap_or_default(),
            scope_reference: present(params.scope_reference.as_deref()),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
