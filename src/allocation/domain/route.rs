//! Navigable task-detail route: `/allocations/{allocation_id}/{task_name}`.

use super::{AllocationDomainError, AllocationId, TaskName};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::Serialize;
use std::fmt;

/// Characters escaped when a value is written into a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Route parameters identifying one task inside one allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaskRoute {
    allocation_id: AllocationId,
    task_name: TaskName,
}

impl TaskRoute {
    /// Creates a route from already-validated parameters.
    #[must_use]
    pub const fn new(allocation_id: AllocationId, task_name: TaskName) -> Self {
        Self {
            allocation_id,
            task_name,
        }
    }

    /// Parses a URL path into route parameters.
    ///
    /// A single trailing slash is tolerated. Segments are percent-decoded.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationDomainError::InvalidRoute`] when the path does not
    /// have exactly the `/allocations/{id}/{task}` shape,
    /// [`AllocationDomainError::InvalidRouteEncoding`] when a segment does not
    /// decode to UTF-8, or identifier validation errors for empty segments.
    pub fn parse(path: &str) -> Result<Self, AllocationDomainError> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let segments: Vec<&str> = trimmed.split('/').collect();
        let ["", "allocations", raw_allocation_id, raw_task_name] = segments.as_slice() else {
            return Err(AllocationDomainError::InvalidRoute(path.to_owned()));
        };

        let allocation_id = AllocationId::new(decode_segment(raw_allocation_id)?)?;
        let task_name = TaskName::new(decode_segment(raw_task_name)?)?;
        Ok(Self::new(allocation_id, task_name))
    }

    /// Returns the allocation identifier.
    #[must_use]
    pub const fn allocation_id(&self) -> &AllocationId {
        &self.allocation_id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn task_name(&self) -> &TaskName {
        &self.task_name
    }

    /// Returns the encoded path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        format!(
            "{}/{}",
            allocation_path(&self.allocation_id),
            encode_segment(self.task_name.as_str())
        )
    }
}

impl fmt::Display for TaskRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Returns the encoded path of the allocation detail page.
#[must_use]
pub fn allocation_path(allocation_id: &AllocationId) -> String {
    format!("/allocations/{}", encode_segment(allocation_id.as_str()))
}

/// Returns the backend API path used to fetch an allocation.
#[must_use]
pub fn allocation_api_path(allocation_id: &AllocationId) -> String {
    format!("/v1/allocation/{}", encode_segment(allocation_id.as_str()))
}

/// Percent-encodes a value for use as one path segment.
#[must_use]
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

fn decode_segment(raw: &str) -> Result<String, AllocationDomainError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| AllocationDomainError::InvalidRouteEncoding(raw.to_owned()))
}
