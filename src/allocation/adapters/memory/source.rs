//! In-memory allocation source that records every handled request.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::allocation::{
    domain::{Allocation, AllocationId, allocation_api_path},
    ports::{AllocationSource, AllocationSourceError, AllocationSourceResult},
};

/// Request observed by [`InMemoryAllocationSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandledRequest {
    /// Backend path the request would have been sent to.
    pub path: String,
    /// Status the backend would have answered with.
    pub status: u16,
}

/// Thread-safe in-memory allocation source.
///
/// Lookups are answered like the backend would: `200` when the allocation is
/// stored, `404` otherwise. Each lookup is appended to the request log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAllocationSource {
    state: Arc<RwLock<InMemorySourceState>>,
}

#[derive(Debug, Default)]
struct InMemorySourceState {
    allocations: HashMap<AllocationId, Allocation>,
    handled_requests: Vec<HandledRequest>,
}

impl InMemoryAllocationSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an allocation, replacing any record with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationSourceError::Transport`] when lock acquisition
    /// fails.
    pub fn insert(&self, allocation: Allocation) -> AllocationSourceResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AllocationSourceError::transport(std::io::Error::other(err.to_string()))
        })?;
        state
            .allocations
            .insert(allocation.id().clone(), allocation);
        Ok(())
    }

    /// Returns every request handled so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationSourceError::Transport`] when lock acquisition
    /// fails.
    pub fn handled_requests(&self) -> AllocationSourceResult<Vec<HandledRequest>> {
        let state = self.state.read().map_err(|err| {
            AllocationSourceError::transport(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.handled_requests.clone())
    }
}

#[async_trait]
impl AllocationSource for InMemoryAllocationSource {
    async fn find_by_id(&self, id: &AllocationId) -> AllocationSourceResult<Option<Allocation>> {
        let mut state = self.state.write().map_err(|err| {
            AllocationSourceError::transport(std::io::Error::other(err.to_string()))
        })?;
        let found = state.allocations.get(id).cloned();
        let status = if found.is_some() { 200 } else { 404 };
        state.handled_requests.push(HandledRequest {
            path: allocation_api_path(id),
            status,
        });
        Ok(found)
    }
}
