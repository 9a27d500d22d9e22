//! Assembly of the complete task detail view-model.

use super::{ResourceResolver, TaskDetailResult};
use crate::allocation::{
    domain::{
        Allocation, ResourcesMatch, TaskAddresses, TaskDetailView, TaskRoute, TaskState,
        TaskSummary, breadcrumbs, merge_ports, project_events,
    },
    ports::AllocationSource,
};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Task detail orchestration service.
#[derive(Clone)]
pub struct TaskDetailService<S>
where
    S: AllocationSource,
{
    resolver: ResourceResolver<S>,
}

impl<S> TaskDetailService<S>
where
    S: AllocationSource,
{
    /// Creates a service over the given allocation source.
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self {
            resolver: ResourceResolver::new(source),
        }
    }

    /// Builds the view-model for a route.
    ///
    /// The allocation fetch is the only backend request. Missing resources,
    /// networks, node data or events degrade to an empty section rather than
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns the resolver's [`TaskDetailError`](super::TaskDetailError)
    /// unchanged; no partial view is produced.
    #[instrument(
        name = "task_detail.assemble",
        skip(self, route),
        fields(allocation_id = %route.allocation_id(), task_name = %route.task_name())
    )]
    pub async fn assemble(&self, route: &TaskRoute) -> TaskDetailResult<TaskDetailView> {
        let resolved = self.resolver.resolve(route).await?;
        let (allocation, task) = resolved.into_parts();

        let addresses = task_addresses(&allocation, &task);
        let events = project_events(task.events());
        debug!(
            addresses = addresses.entries().len(),
            events = events.len(),
            "task detail assembled"
        );

        Ok(TaskDetailView::new(
            allocation.id().clone(),
            TaskSummary::from_task(&task),
            breadcrumbs(allocation.id(), task.name()),
            addresses,
            events,
        ))
    }
}

fn task_addresses(allocation: &Allocation, task: &TaskState) -> TaskAddresses {
    let resources = match allocation.resources_for(task.name()) {
        ResourcesMatch::Missing => return TaskAddresses::None,
        ResourcesMatch::Unique(resources) => resources,
        ResourcesMatch::Ambiguous(count) => {
            error!(
                allocation_id = %allocation.id(),
                task_name = %task.name(),
                matches = count,
                "multiple task resource records match one task; listing no addresses"
            );
            return TaskAddresses::None;
        }
    };

    if resources.networks().len() > 1 {
        debug!(
            networks = resources.networks().len(),
            "only the first network is listed"
        );
    }

    let Some(node) = allocation.node() else {
        warn!(
            allocation_id = %allocation.id(),
            node_id = %allocation.node_id(),
            "node record unavailable; listing no addresses"
        );
        return TaskAddresses::None;
    };
    merge_ports(Some(resources), &node.host_address())
}
