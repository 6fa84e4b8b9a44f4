//! reqwest-backed gateway.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::{GatewayConfig, GatewayError, GatewayRequest, GatewayResponse, HttpGateway, Result};

/// [`HttpGateway`] implementation on top of a pooled `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestGateway {
    inner: reqwest::Client,
    config: Arc<GatewayConfig>,
}

impl ReqwestGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the gateway configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn map_error(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.config.timeout)
        } else if err.is_connect() {
            GatewayError::Connection(err.to_string())
        } else {
            GatewayError::Http(err)
        }
    }
}

#[async_trait]
impl HttpGateway for ReqwestGateway {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse> {
        let url = request.resolve_url(self.config.base_url.as_deref())?;
        let (method, headers, body) = request.into_parts();

        debug!(method = %method, url = %url, "Sending gateway request");

        let mut builder = self.inner.request(method, url);

        // Request-specific headers take precedence over defaults
        for (name, value) in &self.config.default_headers {
            if !headers.contains_key(name.as_str()) {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| self.map_error(e))?;

        debug!(status = %response.status(), "Gateway response received");

        GatewayResponse::from_reqwest(response).await
    }
}
