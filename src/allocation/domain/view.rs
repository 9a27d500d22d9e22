//! View-model of the task detail page.

use super::{
    AllocationId, EventTimeline, TaskAddresses, TaskLifecycleState, TaskName, TaskState,
    allocation_path, format_display_time,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Breadcrumb segment kinds in trail order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreadcrumbKind {
    /// Allocation list placeholder.
    Allocations,
    /// Parent allocation.
    Allocation,
    /// Current task.
    Task,
}

impl BreadcrumbKind {
    /// Returns the stable identifier used by page hooks.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allocations => "allocations",
            Self::Allocation => "allocation",
            Self::Task => "task",
        }
    }
}

/// One breadcrumb segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    kind: BreadcrumbKind,
    label: String,
    href: Option<String>,
}

impl Breadcrumb {
    /// Returns the segment kind.
    #[must_use]
    pub const fn kind(&self) -> BreadcrumbKind {
        self.kind
    }

    /// Returns the displayed label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the navigation target, or `None` for the current page.
    ///
    /// The allocations placeholder links to `#`.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }
}

/// Builds the `Allocations / {short id} / {task}` trail.
#[must_use]
pub fn breadcrumbs(allocation_id: &AllocationId, task_name: &TaskName) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb {
            kind: BreadcrumbKind::Allocations,
            label: "Allocations".to_owned(),
            href: Some("#".to_owned()),
        },
        Breadcrumb {
            kind: BreadcrumbKind::Allocation,
            label: allocation_id.short_id().to_owned(),
            href: Some(allocation_path(allocation_id)),
        },
        Breadcrumb {
            kind: BreadcrumbKind::Task,
            label: task_name.as_str().to_owned(),
            href: None,
        },
    ]
}

/// High-level task information shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    name: TaskName,
    state: TaskLifecycleState,
    started_at: Option<DateTime<Utc>>,
    started_at_display: Option<String>,
    finished_at: Option<DateTime<Utc>>,
    failed: bool,
    restarts: u64,
}

impl TaskSummary {
    /// Copies summary fields from a task state record.
    #[must_use]
    pub fn from_task(task: &TaskState) -> Self {
        Self {
            name: task.name().clone(),
            state: task.state(),
            started_at: task.started_at(),
            started_at_display: task.started_at().map(format_display_time),
            finished_at: task.finished_at(),
            failed: task.failed(),
            restarts: task.restarts(),
        }
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskLifecycleState {
        self.state
    }

    /// Returns the start timestamp.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns the formatted start timestamp.
    #[must_use]
    pub fn started_at_display(&self) -> Option<&str> {
        self.started_at_display.as_deref()
    }

    /// Returns the finish timestamp.
    #[must_use]
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Returns whether the task failed.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.failed
    }

    /// Returns the restart count.
    #[must_use]
    pub const fn restarts(&self) -> u64 {
        self.restarts
    }
}

/// Complete view-model of the task detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetailView {
    allocation_id: AllocationId,
    task: TaskSummary,
    breadcrumbs: Vec<Breadcrumb>,
    addresses: TaskAddresses,
    events: EventTimeline,
}

impl TaskDetailView {
    /// Assembles a view from its parts.
    #[must_use]
    pub const fn new(
        allocation_id: AllocationId,
        task: TaskSummary,
        breadcrumbs: Vec<Breadcrumb>,
        addresses: TaskAddresses,
        events: EventTimeline,
    ) -> Self {
        Self {
            allocation_id,
            task,
            breadcrumbs,
            addresses,
            events,
        }
    }

    /// Returns the allocation the task belongs to.
    #[must_use]
    pub const fn allocation_id(&self) -> &AllocationId {
        &self.allocation_id
    }

    /// Returns the task summary.
    #[must_use]
    pub const fn task(&self) -> &TaskSummary {
        &self.task
    }

    /// Returns the breadcrumb trail.
    #[must_use]
    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    /// Returns the breadcrumb of the given kind.
    #[must_use]
    pub fn breadcrumb(&self, kind: BreadcrumbKind) -> Option<&Breadcrumb> {
        self.breadcrumbs.iter().find(|crumb| crumb.kind() == kind)
    }

    /// Returns the address section.
    #[must_use]
    pub const fn addresses(&self) -> &TaskAddresses {
        &self.addresses
    }

    /// Returns the event timeline.
    #[must_use]
    pub const fn events(&self) -> &EventTimeline {
        &self.events
    }
}
