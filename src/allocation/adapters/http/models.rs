//! Wire models for the backend's allocation payload.
//!
//! Field names follow the backend's PascalCase JSON. Task states and task
//! resources arrive as objects keyed by task name.

use crate::allocation::{
    domain::{
        Allocation, AllocationId, NetworkResource, Node, NodeId, Port, TaskEvent,
        TaskLifecycleState, TaskName, TaskResources, TaskState,
    },
    ports::AllocationSourceError,
};
use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Allocation payload returned by `GET /v1/allocation/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllocationPayload {
    /// Allocation identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Owning node identifier.
    #[serde(rename = "NodeID")]
    pub node_id: String,
    /// Embedded node record.
    #[serde(default)]
    pub node: Option<NodePayload>,
    /// Task states keyed by task name.
    #[serde(default)]
    pub task_states: Option<BTreeMap<String, TaskStatePayload>>,
    /// Task resources keyed by task name.
    #[serde(default)]
    pub task_resources: Option<BTreeMap<String, TaskResourcesPayload>>,
}

/// Embedded node record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodePayload {
    /// Node identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Node name.
    #[serde(default)]
    pub name: String,
    /// Agent address in `host:port` form.
    #[serde(rename = "HTTPAddr")]
    pub http_addr: String,
}

/// Runtime state of one task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskStatePayload {
    /// Lifecycle state string.
    pub state: String,
    /// Whether the task failed.
    #[serde(default)]
    pub failed: bool,
    /// Restart count.
    #[serde(default)]
    pub restarts: u64,
    /// Start time; the zero time means "not started".
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// Finish time; the zero time means "not finished".
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
    /// Recorded events.
    #[serde(default)]
    pub events: Option<Vec<TaskEventPayload>>,
}

/// One recorded task event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskEventPayload {
    /// Event type tag.
    #[serde(rename = "Type")]
    pub event_type: String,
    /// Unix timestamp in nanoseconds.
    pub time: i64,
    /// Raw message.
    #[serde(default)]
    pub message: String,
    /// Human-oriented message, preferred when present.
    #[serde(default)]
    pub display_message: String,
}

/// Resources of one task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskResourcesPayload {
    /// Network descriptors.
    #[serde(default)]
    pub networks: Option<Vec<NetworkPayload>>,
}

/// One network descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkPayload {
    /// Assigned IP address.
    #[serde(rename = "IP", default)]
    pub ip: Option<String>,
    /// Reserved bandwidth.
    #[serde(rename = "MBits", default)]
    pub mbits: Option<u32>,
    /// Statically reserved ports.
    #[serde(default)]
    pub reserved_ports: Option<Vec<PortPayload>>,
    /// Scheduler-assigned ports.
    #[serde(default)]
    pub dynamic_ports: Option<Vec<PortPayload>>,
}

/// One labelled port.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortPayload {
    /// Port label.
    pub label: String,
    /// Port number.
    pub value: u16,
}

impl TryFrom<AllocationPayload> for Allocation {
    type Error = AllocationSourceError;

    fn try_from(payload: AllocationPayload) -> Result<Self, Self::Error> {
        let id = AllocationId::new(payload.id).map_err(|err| decode_error(&err))?;
        let node_id = NodeId::new(payload.node_id).map_err(|err| decode_error(&err))?;

        let task_states = payload
            .task_states
            .unwrap_or_default()
            .into_iter()
            .map(|(name, state)| state.into_domain(name))
            .collect::<Result<Vec<_>, _>>()?;
        let task_resources = payload
            .task_resources
            .unwrap_or_default()
            .into_iter()
            .map(|(name, resources)| resources.into_domain(name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut allocation = Self::new(id, node_id)
            .with_task_states(task_states)
            .with_task_resources(task_resources);
        if let Some(node) = payload.node {
            allocation = allocation.with_node(node.into_domain()?);
        }
        Ok(allocation)
    }
}

impl NodePayload {
    fn into_domain(self) -> Result<Node, AllocationSourceError> {
        let id = NodeId::new(self.id).map_err(|err| decode_error(&err))?;
        Ok(Node::new(id, self.name, self.http_addr))
    }
}

impl TaskStatePayload {
    fn into_domain(self, name: String) -> Result<TaskState, AllocationSourceError> {
        let task_name = TaskName::new(name).map_err(|err| decode_error(&err))?;
        let lifecycle = TaskLifecycleState::try_from(self.state.as_str())
            .map_err(|err| decode_error(&err))?;
        let events = self
            .events
            .unwrap_or_default()
            .into_iter()
            .map(TaskEventPayload::into_domain);

        let mut task = TaskState::new(task_name, lifecycle)
            .with_failed(self.failed)
            .with_restarts(self.restarts)
            .with_events(events);
        if let Some(started_at) = self.started_at.filter(is_set) {
            task = task.with_started_at(started_at);
        }
        if let Some(finished_at) = self.finished_at.filter(is_set) {
            task = task.with_finished_at(finished_at);
        }
        Ok(task)
    }
}

impl TaskEventPayload {
    fn into_domain(self) -> TaskEvent {
        let message = if self.display_message.is_empty() {
            self.message
        } else {
            self.display_message
        };
        TaskEvent::new(self.time, self.event_type, message)
    }
}

impl TaskResourcesPayload {
    fn into_domain(self, name: String) -> Result<TaskResources, AllocationSourceError> {
        let task_name = TaskName::new(name).map_err(|err| decode_error(&err))?;
        let networks = self
            .networks
            .unwrap_or_default()
            .into_iter()
            .map(NetworkPayload::into_domain);
        Ok(TaskResources::new(task_name).with_networks(networks))
    }
}

impl NetworkPayload {
    fn into_domain(self) -> NetworkResource {
        let mut network = NetworkResource::new()
            .with_reserved_ports(ports(self.reserved_ports))
            .with_dynamic_ports(ports(self.dynamic_ports));
        if let Some(ip) = self.ip.filter(|ip| !ip.is_empty()) {
            network = network.with_ip(ip);
        }
        if let Some(mbits) = self.mbits {
            network = network.with_mbits(mbits);
        }
        network
    }
}

fn ports(payload: Option<Vec<PortPayload>>) -> Vec<Port> {
    payload
        .unwrap_or_default()
        .into_iter()
        .map(|port| Port::new(port.label, port.value))
        .collect()
}

/// The backend encodes "unset" timestamps as year 1.
fn is_set(time: &DateTime<Utc>) -> bool {
    time.year() > 1
}

fn decode_error(err: &impl std::error::Error) -> AllocationSourceError {
    AllocationSourceError::Decode(err.to_string())
}
