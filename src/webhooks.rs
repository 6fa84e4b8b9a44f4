//! Webhook subscriptions and inbound webhook handling

use crate::params::{SubscribeRequest, SubscriptionBody};
use k2_core::{ApiResponse, ResponseShape, normalize, validation_failed};
use k2_http::{GatewayRequest, HeaderMap, HttpGateway};
use k2_validation::Validate;
use k2_webhooks::headers::SIGNATURE;
use k2_webhooks::{HandlerRegistry, WebhookDispatcher, WebhookRequest};
use std::sync::Arc;
use tracing::debug;

const SUBSCRIPTIONS_PATH: &str = "api/v1/webhook_subscriptions";

/// Creates webhook subscriptions and verifies and dispatches the webhooks
/// they produce.
#[derive(Clone)]
pub struct WebhookService {
    gateway: Arc<dyn HttpGateway>,
    dispatcher: WebhookDispatcher,
}

impl WebhookService {
    /// Create a service that echoes every known event back as success data
    pub fn new(gateway: Arc<dyn HttpGateway>) -> Self {
        Self {
            gateway,
            dispatcher: WebhookDispatcher::default(),
        }
    }

    /// Replace the handlers used for inbound webhooks
    pub fn with_registry(mut self, registry: HandlerRegistry) -> Self {
        self.dispatcher = WebhookDispatcher::new(registry);
        self
    }

    /// The handlers consulted for inbound webhooks
    pub fn registry(&self) -> &HandlerRegistry {
        self.dispatcher.registry()
    }

    /// Subscribe a URL to an event type.
    ///
    /// On success the data is `{"location": ...}`, the URL of the new
    /// subscription.
    pub async fn subscribe(&self, params: &SubscribeRequest) -> ApiResponse {
        if let Err(err) = params.validate() {
            return validation_failed(err);
        }

        let request = GatewayRequest::post(SUBSCRIPTIONS_PATH)
            .bearer_auth(params.access_token.as_deref().unwrap_or_default())
            .json(&SubscriptionBody::new(params));

        debug!(event_type = ?params.event_type, "Creating webhook subscription");

        normalize(self.gateway.send(request).await, ResponseShape::Location)
    }

    /// Verify and dispatch an inbound webhook from its raw parts
    pub fn webhook_handler(&self, raw_body: &[u8], signature: &str, secret: &str) -> ApiResponse {
        self.dispatcher.verify_and_dispatch(raw_body, signature, secret)
    }

    /// Verify and dispatch an already assembled webhook request
    pub fn handle(&self, request: &WebhookRequest) -> ApiResponse {
        self.dispatcher.dispatch(request)
    }

    /// Verify and dispatch using the signature header from `headers`.
    ///
    /// A missing or non-text header is treated as an empty signature.
    pub fn handle_from_headers(
        &self,
        raw_body: &[u8],
        headers: &HeaderMap,
        secret: &str,
    ) -> ApiResponse {
        let signature = headers
            .get(SIGNATURE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        self.webhook_handler(raw_body, signature, secret)
    }
}

impl std::fmt::Debug for WebhookService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookService")
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
