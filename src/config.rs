//! Client configuration

use k2_http::GatewayConfig;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Sandbox environment, used when no base URL is configured.
pub const SANDBOX_URL: &str = "https://sandbox.kopokopo.com/";

/// Environment variable prefix read by [`K2Config::from_env`].
pub const ENV_PREFIX: &str = "K2";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Client ID must not be empty")]
    MissingClientId,

    #[error(transparent)]
    Gateway(#[from] k2_http::GatewayError),
}

/// Connection settings and application credentials for K2 Connect.
#[derive(Debug)]
pub struct K2Config {
    client_id: String,
    client_secret: Option<SecretString>,
    api_key: Option<SecretString>,
    base_url: Url,
    timeout: Duration,
    user_agent: Option<String>,
}

impl K2Config {
    /// Start building a configuration
    pub fn builder() -> K2ConfigBuilder {
        K2ConfigBuilder::default()
    }

    /// Load configuration from `K2_*` environment variables.
    ///
    /// `K2_CLIENT_ID` and `K2_CLIENT_SECRET` are required. `K2_API_KEY`,
    /// `K2_BASE_URL` and `K2_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(ENV_PREFIX, |key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            let key = format!("{}_{}", prefix, name);
            lookup(&key).map(|v| (key, v))
        };
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingVar(format!("{}_{}", prefix, name)))
        };

        let (_, client_id) = required("CLIENT_ID")?;
        let (_, client_secret) = required("CLIENT_SECRET")?;

        let mut builder = Self::builder()
            .client_id(client_id)
            .client_secret(client_secret);

        if let Some((_, api_key)) = var("API_KEY") {
            builder = builder.api_key(api_key);
        }

        if let Some((_, base_url)) = var("BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Some((key, secs)) = var("TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key,
                    message: e.to_string(),
                }
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Application client ID
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Application client secret, if configured
    pub fn client_secret(&self) -> Option<&SecretString> {
        self.client_secret.as_ref()
    }

    /// API key, if configured
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    /// API base URL, always ending in `/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Settings for the HTTP gateway
    pub fn gateway_config(&self) -> GatewayConfig {
        let builder = GatewayConfig::builder()
            .base_url(self.base_url.as_str())
            .timeout(self.timeout);

        match &self.user_agent {
            Some(user_agent) => builder.user_agent(user_agent.clone()).build(),
            None => builder.build(),
        }
    }

    /// Whether both credentials needed for token requests are present
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty()
            && self
                .client_secret
                .as_ref()
                .is_some_and(|s| !s.expose_secret().is_empty())
    }
}

/// Builder for [`K2Config`]
#[derive(Default)]
pub struct K2ConfigBuilder {
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl K2ConfigBuilder {
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(SecretString::new(client_secret.into().into()));
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into().into()));
        self
    }

    /// Set the API base URL. Defaults to [`SANDBOX_URL`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<K2Config, ConfigError> {
        let client_id = self
            .client_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(ConfigError::MissingClientId)?;

        let mut raw = self.base_url.unwrap_or_else(|| SANDBOX_URL.to_string());
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let base_url = Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "unsupported scheme: {}",
                base_url.scheme()
            )));
        }

        Ok(K2Config {
            client_id,
            client_secret: self.client_secret,
            api_key: self.api_key,
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self.user_agent,
        })
    }
}
