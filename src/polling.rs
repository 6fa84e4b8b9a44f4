//! Transaction polling

use crate::params::{PollTransactionsRequest, PollingBody, StatusRequest};
use k2_core::{ApiResponse, ResponseShape, normalize, validation_failed};
use k2_http::{GatewayRequest, HttpGateway};
use k2_validation::Validate;
use std::sync::Arc;
use tracing::debug;

const POLLING_PATH: &str = "api/v1/polling";

/// Requests transaction polls and reads their status.
#[derive(Clone)]
pub struct PollingService {
    gateway: Arc<dyn HttpGateway>,
}

impl PollingService {
    /// Create a service over a gateway
    pub fn new(gateway: Arc<dyn HttpGateway>) -> Self {
        Self { gateway }
    }

    /// Ask the provider to collect transactions in a time window.
    ///
    /// Results are delivered later to the callback URL; on success the data
    /// is `{"location": ...}`, the URL of the polling request.
    pub async fn poll_transactions(&self, params: &PollTransactionsRequest) -> ApiResponse {
        if let Err(err) = params.validate() {
            return validation_failed(err);
        }

        let request = GatewayRequest::post(POLLING_PATH)
            .bearer_auth(params.access_token.as_deref().unwrap_or_default())
            .json(&PollingBody::new(params));

        debug!(scope = ?params.scope, "Requesting transaction poll");

        normalize(self.gateway.send(request).await, ResponseShape::Location)
    }

    /// Fetch the status of a polling request from its location URL.
    pub async fn get_status(&self, params: &StatusRequest) -> ApiResponse {
        if let Err(err) = params.validate() {
            return validation_failed(err);
        }

        let location = params.location.as_deref().unwrap_or_default();
        let request = GatewayRequest::get(location)
            .bearer_auth(params.access_token.as_deref().unwrap_or_default());

        debug!(location = %location, "Fetching polling status");

        normalize(self.gateway.send(request).await, ResponseShape::Body)
    }
}

impl std::fmt::Debug for PollingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollingService").finish_non_exhaustive()
    }
}
