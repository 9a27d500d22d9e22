//! Shared world state for task detail BDD scenarios.

use std::collections::BTreeMap;
use std::sync::Arc;

use rstest::fixture;
use task_detail::allocation::{
    adapters::memory::InMemoryAllocationSource,
    domain::{
        Allocation, AllocationId, NetworkResource, Node, NodeId, Port, TaskEvent,
        TaskLifecycleState, TaskName, TaskResources, TaskRoute, TaskState,
    },
    services::{TaskDetailService, TaskDetailSession, ViewState},
};

/// Ports declared for one task.
#[derive(Debug, Default)]
pub struct PortPlan {
    pub reserved: Vec<Port>,
    pub dynamic: Vec<Port>,
    pub declares_network: bool,
}

/// Scenario world for task detail behaviour tests.
pub struct TaskDetailWorld {
    pub source: Arc<InMemoryAllocationSource>,
    pub allocation_id: Option<String>,
    pub node_addr: Option<String>,
    pub tasks: Vec<TaskState>,
    pub port_plans: BTreeMap<String, PortPlan>,
    pub requested_route: Option<TaskRoute>,
    pub current_url: Option<String>,
    pub last_state: Option<ViewState>,
}

impl TaskDetailWorld {
    /// Creates a world with an empty allocation source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: Arc::new(InMemoryAllocationSource::new()),
            allocation_id: None,
            node_addr: None,
            tasks: Vec::new(),
            port_plans: BTreeMap::new(),
            requested_route: None,
            current_url: None,
            last_state: None,
        }
    }

    /// Returns the port plan for a task, creating an empty one on first use.
    pub fn port_plan(&mut self, task_name: &str) -> &mut PortPlan {
        self.port_plans.entry(task_name.to_owned()).or_default()
    }

    /// Builds the allocation described by the given steps and stores it.
    pub fn publish_allocation(&self) -> Result<(), eyre::Report> {
        let raw_id = self
            .allocation_id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing allocation id in scenario world"))?;
        let node_addr = self
            .node_addr
            .clone()
            .ok_or_else(|| eyre::eyre!("missing node address in scenario world"))?;
        let node_id = NodeId::new("node-bdd")?;

        let resources = self
            .port_plans
            .iter()
            .map(|(task_name, plan)| {
                let networks = if plan.declares_network {
                    vec![
                        NetworkResource::new()
                            .with_reserved_ports(plan.reserved.clone())
                            .with_dynamic_ports(plan.dynamic.clone()),
                    ]
                } else {
                    Vec::new()
                };
                Ok(TaskResources::new(TaskName::new(task_name.clone())?)
                    .with_networks(networks))
            })
            .collect::<Result<Vec<_>, eyre::Report>>()?;

        let allocation = Allocation::new(AllocationId::new(raw_id)?, node_id.clone())
            .with_node(Node::new(node_id, "bdd-client", node_addr))
            .with_task_states(self.tasks.clone())
            .with_task_resources(resources);
        self.source.insert(allocation)?;
        Ok(())
    }

    /// Creates a session over the world's allocation source.
    #[must_use]
    pub fn session(&self) -> TaskDetailSession<InMemoryAllocationSource> {
        TaskDetailSession::new(TaskDetailService::new(Arc::clone(&self.source)))
    }
}

impl Default for TaskDetailWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds `count` events one second apart, starting at a fixed instant.
#[must_use]
pub fn sample_events(count: usize) -> Vec<TaskEvent> {
    (0..count)
        .map(|offset| {
            let seconds = i64::try_from(offset).unwrap_or_default();
            TaskEvent::new(
                1_600_000_000_000_000_000 + seconds * 1_000_000_000,
                format!("Event {offset}"),
                format!("Lifecycle message {offset}"),
            )
        })
        .collect()
}

/// Parses a lifecycle state name used in feature files.
pub fn lifecycle_state(raw: &str) -> Result<TaskLifecycleState, eyre::Report> {
    Ok(TaskLifecycleState::try_from(raw)?)
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskDetailWorld {
    TaskDetailWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
