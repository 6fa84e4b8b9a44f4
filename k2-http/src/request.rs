//! Outbound request description.

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;

/// A transport-agnostic HTTP request handed to an [`HttpGateway`](crate::HttpGateway).
///
/// `url` is either absolute or a path relative to the gateway's base URL.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl GatewayRequest {
    /// Create a new request.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Create a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Create a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Add a header to the request. Invalid names or values are skipped.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::try_from(value.as_str()),
        ) {
            self.headers.insert(name, value);
        } else {
            tracing::warn!(header = %name, "Skipping header with invalid name or value");
        }
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, json: &T) -> Self {
        match serde_json::to_vec(json) {
            Ok(bytes) => {
                self.headers.insert(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                );
                self.body = Some(bytes);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize JSON body");
            }
        }
        self
    }

    /// Set bearer authentication.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request URL or path.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a specific header value.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decode the request body as JSON.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }

    /// Resolve the final URL against an optional base.
    pub fn resolve_url(&self, base: Option<&str>) -> crate::Result<url::Url> {
        let url = match base {
            Some(base) if url::Url::parse(&self.url).is_err() => {
                let base = url::Url::parse(base)
                    .map_err(|e| crate::GatewayError::InvalidUrl(e.to_string()))?;
                base.join(&self.url)
                    .map_err(|e| crate::GatewayError::InvalidUrl(e.to_string()))?
            }
            _ => url::Url::parse(&self.url)
                .map_err(|e| crate::GatewayError::InvalidUrl(e.to_string()))?,
        };

        Ok(url)
    }

    pub(crate) fn into_parts(self) -> (Method, HeaderMap, Option<Vec<u8>>) {
        (self.method, self.headers, self.body)
    }
}
