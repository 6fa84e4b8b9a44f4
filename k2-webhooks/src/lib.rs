//! Inbound webhook verification and dispatch for K2 Connect
//!
//! Webhooks arrive with an `X-KopoKopo-Signature` header carrying the hex
//! HMAC-SHA256 of the raw body under a shared secret. The
//! [`WebhookDispatcher`] checks that signature, parses the payload and
//! routes it by topic to a handler from an immutable [`HandlerRegistry`].
//!
//! # Example
//!
//! ```rust
//! use k2_core::ApiResponse;
//! use k2_webhooks::{EventType, HandlerRegistry, WebhookDispatcher, WebhookSignature};
//!
//! let dispatcher = WebhookDispatcher::new(
//!     HandlerRegistry::builder()
//!         .on(EventType::CustomerCreated, |_topic, _event_type, resource| {
//!             ApiResponse::success(resource.clone())
//!         })
//!         .build(),
//! );
//!
//! let body = br#"{"topic":"customer_created","event":{"type":"Customer Created","resource":{"first_name":"Jane"}}}"#;
//! let signature = WebhookSignature::new("my_webhook_secret").sign(body);
//!
//! let result = dispatcher.verify_and_dispatch(body, &signature, "my_webhook_secret");
//! assert!(result.is_success());
//! ```

mod dispatcher;
mod event;
mod payload;
mod registry;
mod request;
mod signature;

pub use dispatcher::WebhookDispatcher;
pub use event::EventType;
pub use payload::{WebhookEvent, WebhookPayload};
pub use registry::{EventHandler, HandlerRegistry, HandlerRegistryBuilder, Passthrough};
pub use request::{WebhookRequest, WebhookRequestBuilder};
pub use signature::{WebhookSignature, headers, verify};
