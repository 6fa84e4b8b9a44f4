//! The injected transport capability.

use crate::{GatewayRequest, GatewayResponse, Result};
use async_trait::async_trait;

/// Sends an authenticated HTTP request and returns status, headers and body.
///
/// Implementations own transport concerns such as connection pooling,
/// timeouts and any retry policy. Non-2xx statuses are returned as
/// responses, not errors; `Err` is reserved for failures where no response
/// was received.
#[async_trait]
pub trait HttpGateway: Send + Sync {
    /// Send a request.
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse>;
}

#[async_trait]
impl<G: HttpGateway + ?Sized> HttpGateway for std::sync::Arc<G> {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse> {
        (**self).send(request).await
    }
}
