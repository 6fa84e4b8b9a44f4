//! In-memory gateway for tests.

use crate::{GatewayError, GatewayRequest, GatewayResponse, HttpGateway, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

type Outcome = std::result::Result<GatewayResponse, GatewayError>;

/// Gateway that replays queued outcomes in order and records every request.
///
/// Once the queue is drained, further requests fail with a connection error.
#[derive(Clone, Default)]
pub struct MockGateway {
    outcomes: Arc<Mutex<VecDeque<Outcome>>>,
    requests: Arc<Mutex<Vec<GatewayRequest>>>,
}

impl MockGateway {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond(self, response: GatewayResponse) -> Self {
        self.outcomes.lock().push_back(Ok(response));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, error: GatewayError) -> Self {
        self.outcomes.lock().push_back(Err(error));
        self
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<GatewayRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<GatewayRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl HttpGateway for MockGateway {
    async fn send(&self, request: GatewayRequest) -> Result<GatewayResponse> {
        self.requests.lock().push(request);
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Connection("no mock response queued".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[tokio::test]
    async fn test_replays_in_order() {
        let gateway = MockGateway::new()
            .respond(GatewayResponse::with_status(StatusCode::OK))
            .fail(GatewayError::Connection("Error Communicating with Server".into()));

        let first = gateway.send(GatewayRequest::get("/a")).await;
        assert_eq!(first.unwrap().status(), StatusCode::OK);

        let second = gateway.send(GatewayRequest::get("/b")).await;
        assert!(matches!(second, Err(GatewayError::Connection(_))));

        assert_eq!(gateway.request_count(), 2);
        assert_eq!(gateway.last_request().unwrap().url(), "/b");
    }

    #[tokio::test]
    async fn test_empty_queue_fails() {
        let gateway = MockGateway::new();
        let result = gateway.send(GatewayRequest::get("/a")).await;
        assert!(result.is_err());
    }
}
