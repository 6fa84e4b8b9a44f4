//! Inbound webhook envelope

use k2_core::UsageError;

/// Raw body, signature header and shared secret for one inbound webhook.
///
/// The secret is supplied per request and never stored beyond it.
#[derive(Clone)]
pub struct WebhookRequest {
    body: Vec<u8>,
    signature: String,
    secret: String,
}

impl WebhookRequest {
    /// Create a request from all three parts
    pub fn new(
        body: impl Into<Vec<u8>>,
        signature: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            body: body.into(),
            signature: signature.into(),
            secret: secret.into(),
        }
    }

    /// Assemble a request piecewise, e.g. from framework extractors
    pub fn builder() -> WebhookRequestBuilder {
        WebhookRequestBuilder::default()
    }

    /// Raw body bytes, exactly as received
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Signature header value
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for WebhookRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookRequest")
            .field("body_len", &self.body.len())
            .field("signature", &self.signature)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Builder for [`WebhookRequest`]
///
/// Every part must be supplied. An explicitly empty body or signature is
/// accepted here and rejected later by signature verification.
#[derive(Default)]
pub struct WebhookRequestBuilder {
    body: Option<Vec<u8>>,
    signature: Option<String>,
    secret: Option<String>,
}

impl WebhookRequestBuilder {
    /// Set the raw body
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the signature header value
    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Set the shared secret
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Build the request, failing if any part was never supplied
    pub fn build(self) -> Result<WebhookRequest, UsageError> {
        Ok(WebhookRequest {
            body: self.body.ok_or(UsageError::MissingArgument("body"))?,
            signature: self
                .signature
                .ok_or(UsageError::MissingArgument("signature"))?,
            secret: self.secret.ok_or(UsageError::MissingArgument("secret"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_all_parts() {
        let request = WebhookRequest::builder()
            .body(b"{}".to_vec())
            .signature("abc")
            .secret("my_webhook_secret")
            .build()
            .unwrap();

        assert_eq!(request.body(), b"{}");
        assert_eq!(request.signature(), "abc");
        assert_eq!(request.secret(), "my_webhook_secret");
    }

    #[test]
    fn test_builder_with_nothing_fails() {
        let err = WebhookRequest::builder().build().unwrap_err();
        assert_eq!(err, UsageError::MissingArgument("body"));
    }

    #[test]
    fn test_builder_missing_signature() {
        let err = WebhookRequest::builder()
            .body("{}")
            .secret("s")
            .build()
            .unwrap_err();
        assert_eq!(err, UsageError::MissingArgument("signature"));
    }

    #[test]
    fn test_builder_missing_secret() {
        let err = WebhookRequest::builder()
            .body("{}")
            .signature("abc")
            .build()
            .unwrap_err();
        assert_eq!(err, UsageError::MissingArgument("secret"));
    }

    #[test]
    fn test_builder_accepts_empty_parts() {
        assert!(
            WebhookRequest::builder()
                .body(Vec::new())
                .signature("")
                .secret("")
                .build()
                .is_ok()
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let request = WebhookRequest::new("{}", "abc", "my_webhook_secret");
        assert!(!format!("{:?}", request).contains("my_webhook_secret"));
    }
}
