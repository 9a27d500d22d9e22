//! Task detail: the read path behind a cluster dashboard's task page.
//!
//! This crate resolves an allocation and one of its tasks from route
//! parameters, assembles the page view-model (task summary, breadcrumbs,
//! addresses, and events), and classifies lookup failures into typed
//! "Not Found" states.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure records and projections with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for backend access
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory, HTML)
//!
//! # Modules
//!
//! - [`allocation`]: Allocation and task resolution, view assembly, navigation
//! - [`config`]: Backend connection settings
//! - [`telemetry`]: Tracing subscriber setup

pub mod allocation;
pub mod config;
pub mod telemetry;
