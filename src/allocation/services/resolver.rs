//! Resolution of route parameters to an allocation and one of its tasks.

use super::{TaskDetailError, TaskDetailResult};
use crate::allocation::{
    domain::{Allocation, TaskRoute, TaskState},
    ports::AllocationSource,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// An allocation together with the requested task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTask {
    allocation: Allocation,
    task: TaskState,
}

impl ResolvedTask {
    /// Returns the resolved allocation.
    #[must_use]
    pub const fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    /// Returns the resolved task.
    #[must_use]
    pub const fn task(&self) -> &TaskState {
        &self.task
    }

    /// Splits the resolution into the allocation and the task.
    #[must_use]
    pub fn into_parts(self) -> (Allocation, TaskState) {
        (self.allocation, self.task)
    }
}

/// Resolves `(allocation id, task name)` pairs against an allocation source.
#[derive(Clone)]
pub struct ResourceResolver<S>
where
    S: AllocationSource,
{
    source: Arc<S>,
}

impl<S> ResourceResolver<S>
where
    S: AllocationSource,
{
    /// Creates a resolver over the given source.
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetches the allocation named by the route and locates its task.
    ///
    /// Exactly one source lookup is issued. The task is located in the
    /// allocation's embedded task states without further requests.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDetailError::AllocationNotFound`] when the source has no
    /// such allocation, [`TaskDetailError::TaskNotFound`] when the allocation
    /// has no task with the requested name, or [`TaskDetailError::Source`]
    /// when the lookup itself fails.
    pub async fn resolve(&self, route: &TaskRoute) -> TaskDetailResult<ResolvedTask> {
        let allocation_id = route.allocation_id();
        let task_name = route.task_name();

        let allocation = match self.source.find_by_id(allocation_id).await {
            Ok(Some(allocation)) => allocation,
            Ok(None) => {
                warn!(lookup = "allocation", %allocation_id, %task_name, "allocation not found");
                return Err(TaskDetailError::AllocationNotFound(allocation_id.clone()));
            }
            Err(err) => {
                warn!(lookup = "backend", %allocation_id, error = %err, "allocation lookup failed");
                return Err(err.into());
            }
        };

        let Some(task) = allocation.find_task(task_name).cloned() else {
            warn!(lookup = "task", %allocation_id, %task_name, "task not found in allocation");
            return Err(TaskDetailError::TaskNotFound {
                allocation_id: allocation_id.clone(),
                task_name: task_name.clone(),
            });
        };

        debug!(%allocation_id, %task_name, "task resolved");
        Ok(ResolvedTask { allocation, task })
    }
}
