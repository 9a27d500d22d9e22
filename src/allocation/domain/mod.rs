//! Domain model for the task detail read path.
//!
//! The allocation domain holds the records fetched from the orchestrator
//! backend and the pure projections over them: port merging, event
//! projection, route handling, and the page view-model. Nothing here performs
//! I/O.

mod addresses;
mod allocation;
mod error;
mod events;
mod ids;
mod node;
mod resources;
mod route;
mod task;
mod view;

pub use addresses::{TaskAddress, TaskAddresses, merge_ports};
pub use allocation::{Allocation, ResourcesMatch};
pub use error::{AllocationDomainError, ParseTaskLifecycleStateError};
pub use events::{
    DISPLAY_TIME_FORMAT, EventTimeline, NANOS_PER_MILLI, TaskEventRow, format_display_time,
    project_events,
};
pub use ids::{AllocationId, NodeId, SHORT_ID_LENGTH, TaskName};
pub use node::{HostAddress, Node, parse_host_address};
pub use resources::{NetworkResource, Port, TaskResources};
pub use route::{TaskRoute, allocation_api_path, allocation_path, encode_segment};
pub use task::{TaskEvent, TaskLifecycleState, TaskState};
pub use view::{Breadcrumb, BreadcrumbKind, TaskDetailView, TaskSummary, breadcrumbs};
