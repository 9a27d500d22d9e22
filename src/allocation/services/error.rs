//! Service-level errors for the task detail read path.

use crate::allocation::{
    domain::{AllocationId, TaskName},
    ports::AllocationSourceError,
};
use thiserror::Error;

/// Title rendered for both lookup failures.
pub const NOT_FOUND_TITLE: &str = "Not Found";

/// Title rendered when the backend itself failed.
pub const BACKEND_ERROR_TITLE: &str = "Backend Error";

/// Classified failure of a task detail request.
///
/// Both not-found variants render the same page; [`TaskDetailError::lookup`]
/// tells them apart for diagnostics.
#[derive(Debug, Clone, Error)]
pub enum TaskDetailError {
    /// The backend has no allocation with the requested identifier.
    #[error("allocation {0} not found")]
    AllocationNotFound(AllocationId),

    /// The allocation exists but has no task with the requested name.
    #[error("task '{task_name}' not found in allocation {allocation_id}")]
    TaskNotFound {
        /// Allocation that was searched.
        allocation_id: AllocationId,
        /// Requested task name.
        task_name: TaskName,
    },

    /// The backend request failed.
    #[error(transparent)]
    Source(#[from] AllocationSourceError),
}

impl TaskDetailError {
    /// Returns the user-visible error title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AllocationNotFound(_) | Self::TaskNotFound { .. } => NOT_FOUND_TITLE,
            Self::Source(_) => BACKEND_ERROR_TITLE,
        }
    }

    /// Returns which lookup failed: `allocation`, `task`, or `backend`.
    #[must_use]
    pub const fn lookup(&self) -> &'static str {
        match self {
            Self::AllocationNotFound(_) => "allocation",
            Self::TaskNotFound { .. } => "task",
            Self::Source(_) => "backend",
        }
    }

    /// Returns whether the error is one of the not-found kinds.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::AllocationNotFound(_) | Self::TaskNotFound { .. })
    }
}

/// Result type for task detail service operations.
pub type TaskDetailResult<T> = Result<T, TaskDetailError>;
