//! reqwest-backed implementation of [`DashboardApi`].

use std::time::Duration;

use tracing::{debug, warn};

use super::errors::ApiError;
use super::{DASHBOARD_PATH, DashboardApi, OPERATIONS_PATH, Operation, OperationRequest};
use crate::config::ServerConfig;
use crate::snapshot::DashboardSnapshot;

/// HTTP client for the operations backend.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDashboardApi {
    /// Create a client for `base_url` (scheme + host + optional port).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Request {
                url: base_url.to_string(),
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `[server]` config section.
    pub fn from_config(server: &ServerConfig) -> Result<Self, ApiError> {
        Self::new(server.base_url(), server.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl DashboardApi for HttpDashboardApi {
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        let url = self.url(DASHBOARD_PATH);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ApiError::Request {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let snapshot = serde_json::from_str(&body).map_err(|e| ApiError::Parse {
            url: url.clone(),
            message: e.to_string(),
        })?;

        debug!(event = "core.api.dashboard_fetched", url = %url, bytes = body.len());

        Ok(snapshot)
    }

    async fn submit_operation(&self, operation: Operation) -> Result<(), ApiError> {
        let url = self.url(OPERATIONS_PATH);

        let response = self
            .client
            .post(&url)
            .json(&OperationRequest::from(operation))
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                event = "core.api.operation_rejected",
                operation = %operation,
                status = status.as_u16()
            );
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        debug!(event = "core.api.operation_accepted", operation = %operation);

        Ok(())
    }
}
