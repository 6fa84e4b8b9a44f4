//! # K2 HTTP Gateway
//!
//! The transport boundary used by every outbound K2 Connect call. Callers
//! describe a request with [`GatewayRequest`] and hand it to an
//! [`HttpGateway`], which returns a [`GatewayResponse`] (any status) or a
//! [`GatewayError`] when no response could be obtained.
//!
//! [`ReqwestGateway`] is the default implementation. Enable the `testing`
//! feature for [`MockGateway`], which replays canned outcomes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use k2_http::{GatewayConfig, GatewayRequest, HttpGateway, ReqwestGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = ReqwestGateway::new(
//!         GatewayConfig::builder()
//!             .base_url("https://sandbox.kopokopo.com/")
//!             .build(),
//!     )?;
//!
//!     let response = gateway
//!         .send(GatewayRequest::get("api/v1/webhook_subscriptions").bearer_auth("token"))
//!         .await?;
//!
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod gateway;
mod request;
mod response;

#[cfg(any(test, feature = "testing"))]
mod mock;

pub use client::ReqwestGateway;
pub use config::{GatewayConfig, GatewayConfigBuilder};
pub use error::{GatewayError, Result};
pub use gateway::HttpGateway;
pub use request::GatewayRequest;
pub use response::GatewayResponse;

#[cfg(any(test, feature = "testing"))]
pub use mock::MockGateway;

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
