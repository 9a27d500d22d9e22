//! Port contracts for the task detail read path.
//!
//! Ports define infrastructure-agnostic interfaces used by the services.

pub mod source;

#[cfg(test)]
pub use source::MockAllocationSource;
pub use source::{AllocationSource, AllocationSourceError, AllocationSourceResult};
