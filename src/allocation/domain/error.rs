//! Error types for allocation domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing allocation domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AllocationDomainError {
    /// The allocation identifier is empty after trimming.
    #[error("allocation identifier must not be empty")]
    EmptyAllocationId,

    /// The node identifier is empty after trimming.
    #[error("node identifier must not be empty")]
    EmptyNodeId,

    /// The task name is empty.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The path does not have the `/allocations/{id}/{task}` shape.
    #[error("invalid task route '{0}', expected /allocations/{{allocation_id}}/{{task_name}}")]
    InvalidRoute(String),

    /// A route segment is not valid UTF-8 once percent-decoded.
    #[error("route segment '{0}' is not valid UTF-8 after percent-decoding")]
    InvalidRouteEncoding(String),
}

/// Error returned while parsing task lifecycle states from backend payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task lifecycle state: {0}")]
pub struct ParseTaskLifecycleStateError(pub String);
