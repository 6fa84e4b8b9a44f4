//! Client entry point

use crate::{ConfigError, K2Config, PollingService, WebhookService};
use k2_http::{HttpGateway, ReqwestGateway};
use std::sync::Arc;
use tracing::info;

/// K2 Connect client.
///
/// Holds the configuration and a single gateway shared by every service
/// handed out through [`polling`](Self::polling) and
/// [`webhooks`](Self::webhooks).
#[derive(Clone)]
pub struct K2 {
    config: Arc<K2Config>,
    gateway: Arc<dyn HttpGateway>,
}

impl K2 {
    /// Create a client backed by a reqwest gateway
    pub fn new(config: K2Config) -> Result<Self, ConfigError> {
        let gateway = ReqwestGateway::new(config.gateway_config())?;
        info!(base_url = %config.base_url(), "K2 Connect client initialized");
        Ok(Self::with_gateway(config, Arc::new(gateway)))
    }

    /// Create a client over a custom gateway
    pub fn with_gateway(config: K2Config, gateway: Arc<dyn HttpGateway>) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
        }
    }

    pub fn config(&self) -> &K2Config {
        &self.config
    }

    /// Transaction polling operations
    pub fn polling(&self) -> PollingService {
        PollingService::new(self.gateway.clone())
    }

    /// Webhook subscription and handling operations
    pub fn webhooks(&self) -> WebhookService {
        WebhookService::new(self.gateway.clone())
    }
}

impl std::fmt::Debug for K2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("K2")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
