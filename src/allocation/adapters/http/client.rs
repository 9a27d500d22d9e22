//! HTTP allocation source backed by the orchestrator's REST API.

use super::models::AllocationPayload;
use crate::allocation::{
    domain::{Allocation, AllocationId, allocation_api_path},
    ports::{AllocationSource, AllocationSourceError, AllocationSourceResult},
};
use crate::config::BackendConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Allocation source issuing `GET /v1/allocation/{id}` requests.
#[derive(Debug, Clone)]
pub struct HttpAllocationSource {
    client: Client,
    base_url: String,
}

impl HttpAllocationSource {
    /// Creates a source for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationSourceError::Transport`] when the HTTP client
    /// cannot be built.
    pub fn new(config: &BackendConfig) -> AllocationSourceResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("task-detail/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(AllocationSourceError::transport)?;
        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_owned(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl AllocationSource for HttpAllocationSource {
    async fn find_by_id(&self, id: &AllocationId) -> AllocationSourceResult<Option<Allocation>> {
        let path = allocation_api_path(id);
        let url = self.url_for(&path);
        debug!(%url, "fetching allocation");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(AllocationSourceError::transport)?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "allocation response received");
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AllocationSourceError::UnexpectedStatus {
                path,
                status: status.as_u16(),
            });
        }

        let payload: AllocationPayload = response
            .json()
            .await
            .map_err(|err| AllocationSourceError::Decode(err.to_string()))?;
        Allocation::try_from(payload).map(Some)
    }
}
