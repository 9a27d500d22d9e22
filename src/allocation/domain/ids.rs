//! Identifier types for allocations, nodes, and tasks.
//!
//! All three identifiers are opaque strings assigned by the orchestrator
//! backend. They are validated to be non-empty but otherwise carried through
//! unchanged, so a route can name an allocation that does not exist.

use super::AllocationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading characters shown for an abbreviated allocation id.
pub const SHORT_ID_LENGTH: usize = 8;

/// Globally unique allocation identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationId(String);

impl AllocationId {
    /// Creates a validated allocation identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationDomainError::EmptyAllocationId`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, AllocationDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(AllocationDomainError::EmptyAllocationId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the abbreviated identifier shown in breadcrumbs.
    ///
    /// This is the first [`SHORT_ID_LENGTH`] characters, or the whole id when
    /// it is shorter.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.0
            .char_indices()
            .nth(SHORT_ID_LENGTH)
            .and_then(|(end, _)| self.0.get(..end))
            .unwrap_or(&self.0)
    }
}

impl AsRef<str> for AllocationId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AllocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the node an allocation is placed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a validated node identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationDomainError::EmptyNodeId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, AllocationDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(AllocationDomainError::EmptyNodeId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task name, unique within one allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// Names are matched by exact equality, so surrounding whitespace is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationDomainError::EmptyTaskName`] when the value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, AllocationDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(AllocationDomainError::EmptyTaskName);
        }
        Ok(Self(raw))
    }

    /// Returns the task name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
