//! Allocation aggregate as fetched from the orchestrator backend.

use super::{AllocationId, Node, NodeId, TaskName, TaskResources, TaskState};
use serde::{Deserialize, Serialize};

/// Scheduling unit binding one or more tasks to a node.
///
/// Allocations are read-only from the view's perspective and are fetched
/// fresh for every navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    id: AllocationId,
    node_id: NodeId,
    node: Option<Node>,
    task_states: Vec<TaskState>,
    task_resources: Vec<TaskResources>,
}

/// Outcome of matching task resources to a task name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcesMatch<'a> {
    /// No resources record carries the task name.
    Missing,
    /// Exactly one record carries the task name.
    Unique(&'a TaskResources),
    /// More than one record carries the task name.
    Ambiguous(usize),
}

impl Allocation {
    /// Creates an allocation without tasks or an embedded node record.
    #[must_use]
    pub const fn new(id: AllocationId, node_id: NodeId) -> Self {
        Self {
            id,
            node_id,
            node: None,
            task_states: Vec::new(),
            task_resources: Vec::new(),
        }
    }

    /// Embeds the node record the allocation is placed on.
    #[must_use]
    pub fn with_node(mut self, node: Node) -> Self {
        self.node = Some(node);
        self
    }

    /// Replaces the task state records.
    #[must_use]
    pub fn with_task_states(mut self, task_states: impl IntoIterator<Item = TaskState>) -> Self {
        self.task_states = task_states.into_iter().collect();
        self
    }

    /// Replaces the task resource records.
    #[must_use]
    pub fn with_task_resources(
        mut self,
        task_resources: impl IntoIterator<Item = TaskResources>,
    ) -> Self {
        self.task_resources = task_resources.into_iter().collect();
        self
    }

    /// Returns the allocation identifier.
    #[must_use]
    pub const fn id(&self) -> &AllocationId {
        &self.id
    }

    /// Returns the identifier of the owning node.
    #[must_use]
    pub const fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    /// Returns the embedded node record when it matches [`Self::node_id`].
    #[must_use]
    pub fn node(&self) -> Option<&Node> {
        self.node.as_ref().filter(|node| node.id() == &self.node_id)
    }

    /// Returns all task state records.
    #[must_use]
    pub fn task_states(&self) -> &[TaskState] {
        &self.task_states
    }

    /// Returns all task resource records.
    #[must_use]
    pub fn task_resources(&self) -> &[TaskResources] {
        &self.task_resources
    }

    /// Finds a task state by exact name.
    #[must_use]
    pub fn find_task(&self, name: &TaskName) -> Option<&TaskState> {
        self.task_states.iter().find(|task| task.name() == name)
    }

    /// Matches task resources to a task by exact name.
    #[must_use]
    pub fn resources_for(&self, name: &TaskName) -> ResourcesMatch<'_> {
        let mut matching = self
            .task_resources
            .iter()
            .filter(|resources| resources.task_name() == name);
        match (matching.next(), matching.count()) {
            (None, _) => ResourcesMatch::Missing,
            (Some(resources), 0) => ResourcesMatch::Unique(resources),
            (Some(_), rest) => ResourcesMatch::Ambiguous(rest + 1),
        }
    }
}
