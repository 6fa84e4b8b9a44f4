//! Verify-then-dispatch engine for inbound webhooks

use crate::{HandlerRegistry, WebhookPayload, WebhookRequest, WebhookSignature};
use k2_core::{ApiResponse, K2Error, K2Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Verifies inbound webhooks and routes them to registered handlers.
///
/// Dispatch has no side effects of its own: identical input yields
/// identical output as long as the handlers behave the same way.
#[derive(Debug, Clone)]
pub struct WebhookDispatcher {
    registry: Arc<HandlerRegistry>,
}

impl WebhookDispatcher {
    /// Create a dispatcher over a registry
    pub fn new(registry: HandlerRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Create a dispatcher sharing an existing registry
    pub fn from_shared(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    /// The registry consulted on every dispatch
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Verify, parse and route a webhook.
    ///
    /// 1. The signature is checked over the raw body; on mismatch the body
    ///    is never parsed.
    /// 2. The body is parsed; it must carry `topic` and `event.type`.
    /// 3. The handler registered for the topic is invoked. An unregistered
    ///    topic is an error, not a silent drop.
    pub fn dispatch(&self, request: &WebhookRequest) -> ApiResponse {
        match self.try_dispatch(request) {
            Ok(response) => response,
            Err(err) => err.into(),
        }
    }

    /// Shorthand for [`dispatch`](Self::dispatch) over borrowed parts
    pub fn verify_and_dispatch(&self, raw_body: &[u8], signature: &str, secret: &str) -> ApiResponse {
        self.dispatch(&WebhookRequest::new(raw_body, signature, secret))
    }

    fn try_dispatch(&self, request: &WebhookRequest) -> K2Result<ApiResponse> {
        if !WebhookSignature::new(request.secret()).verify(request.body(), request.signature()) {
            warn!(body_len = request.body().len(), "Webhook signature verification failed");
            return Err(K2Error::Signature);
        }

        let payload = WebhookPayload::parse(request.body()).inspect_err(|e| {
            warn!(error = %e, "Rejected malformed webhook payload");
        })?;

        let event = payload.event_type();
        let Some(handler) = self.registry.get(&event) else {
            warn!(topic = %payload.topic, "No handler registered for webhook");
            return Err(K2Error::UnregisteredEvent(payload.topic));
        };

        debug!(
            topic = %payload.topic,
            event_type = %payload.event.event_type,
            known = event.is_known(),
            "Dispatching webhook"
        );

        Ok(handler.handle(
            &payload.topic,
            &payload.event.event_type,
            &payload.event.resource,
        ))
    }
}

impl Default for WebhookDispatcher {
    fn default() -> Self {
        Self::new(HandlerRegistry::with_defaults())
    }
}
