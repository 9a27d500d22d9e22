//! Source port for fetching allocations from the orchestrator backend.

use crate::allocation::domain::{Allocation, AllocationId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for allocation source operations.
pub type AllocationSourceResult<T> = Result<T, AllocationSourceError>;

/// Read access to allocation records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AllocationSource: Send + Sync {
    /// Fetches an allocation with its embedded task states, task resources,
    /// and node record.
    ///
    /// Implementations issue exactly one backend request per call. Returns
    /// `None` when the backend reports the allocation as not found.
    async fn find_by_id(&self, id: &AllocationId) -> AllocationSourceResult<Option<Allocation>>;
}

/// Errors returned by allocation source implementations.
#[derive(Debug, Clone, Error)]
pub enum AllocationSourceError {
    /// The backend could not be reached.
    #[error("allocation backend transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The backend answered with a status other than success or not-found.
    #[error("allocation backend returned unexpected status {status} for {path}")]
    UnexpectedStatus {
        /// Request path.
        path: String,
        /// HTTP status code.
        status: u16,
    },

    /// The backend payload could not be decoded into domain records.
    #[error("allocation payload could not be decoded: {0}")]
    Decode(String),
}

impl AllocationSourceError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
