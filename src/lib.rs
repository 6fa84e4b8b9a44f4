//! # K2 Connect
//!
//! Client core for the Kopo Kopo K2 Connect API.
//!
//! - [`PollingService`] requests transaction polls and reads their status.
//! - [`WebhookService`] creates webhook subscriptions and verifies and
//!   dispatches inbound webhooks.
//!
//! Every operation returns an [`ApiResponse`], which serializes as
//! `{"status": "success", "data": ...}` or `{"status": "error", "data": "<message>"}`.
//! Missing parameters, transport failures and bad webhooks are reported
//! through that shape. Only [`UsageError`] is returned as a hard error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use k2_connect::{K2, K2Config, PollTransactionsRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let k2 = K2::new(K2Config::from_env()?)?;
//!
//!     let response = k2
//!         .polling()
//!         .poll_transactions(&PollTransactionsRequest {
//!             from_time: Some("2021-04-12T08:50:22+03:00".into()),
//!             to_time: Some("2021-04-19T08:50:22+03:00".into()),
//!             scope: Some("company".into()),
//!             callback_url: Some("https://example.com/k2/callback".into()),
//!             access_token: Some("myRand0mAcc3ssT0k3n".into()),
//!             ..Default::default()
//!         })
//!         .await;
//!
//!     println!("{}", response.to_json());
//!     Ok(())
//! }
//! ```
//!
//! ## Handling webhooks
//!
//! ```rust
//! use k2_connect::{ApiResponse, EventType, HandlerRegistry, K2, K2Config};
//! use k2_http::MockGateway;
//! use std::sync::Arc;
//!
//! let config = K2Config::builder().client_id("your_client_id").build().unwrap();
//! let webhooks = K2::with_gateway(config, Arc::new(MockGateway::new()))
//!     .webhooks()
//!     .with_registry(
//!         HandlerRegistry::builder()
//!             .on(EventType::BuygoodsTransactionReceived, |_, _, resource| {
//!                 ApiResponse::success(resource["amount"].clone())
//!             })
//!             .build(),
//!     );
//!
//! let result = webhooks.webhook_handler(b"{}", "not-a-signature", "my_webhook_secret");
//! assert_eq!(result, ApiResponse::error("Invalid signature"));
//! ```

mod client;
mod config;
mod params;
mod polling;
mod webhooks;

pub use client::K2;
pub use config::{ConfigError, ENV_PREFIX, K2Config, K2ConfigBuilder, SANDBOX_URL};
pub use params::{PollTransactionsRequest, StatusRequest, SubscribeRequest};
pub use polling::PollingService;
pub use webhooks::WebhookService;

pub use k2_core::{ApiResponse, K2Error, UsageError};
pub use k2_validation::{Validate, ValidationError};
pub use k2_webhooks::{
    EventHandler, EventType, HandlerRegistry, WebhookDispatcher, WebhookPayload, WebhookRequest,
    WebhookSignature,
};
