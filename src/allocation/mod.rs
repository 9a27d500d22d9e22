//! Task detail read path for allocations.
//!
//! This module turns a `/allocations/{allocation_id}/{task_name}` route into
//! the view-model of the task detail page: it fetches the allocation once,
//! locates the named task, merges its reserved and dynamic ports into an
//! address list on the node's host, and projects its lifecycle events. Lookup
//! failures are classified as allocation-not-found or task-not-found. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
