//! Per-task resource descriptors and their port reservations.

use super::TaskName;
use serde::{Deserialize, Serialize};

/// A labelled port reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    label: String,
    value: u16,
}

impl Port {
    /// Creates a port entry.
    #[must_use]
    pub fn new(label: impl Into<String>, value: u16) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Returns the port label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the port number.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.value
    }
}

/// Network descriptor with its reserved and dynamic port pools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkResource {
    ip: Option<String>,
    mbits: Option<u32>,
    reserved_ports: Vec<Port>,
    dynamic_ports: Vec<Port>,
}

impl NetworkResource {
    /// Creates a network with no ports.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the statically reserved ports.
    #[must_use]
    pub fn with_reserved_ports(mut self, ports: impl IntoIterator<Item = Port>) -> Self {
        self.reserved_ports = ports.into_iter().collect();
        self
    }

    /// Sets the scheduler-assigned ports.
    #[must_use]
    pub fn with_dynamic_ports(mut self, ports: impl IntoIterator<Item = Port>) -> Self {
        self.dynamic_ports = ports.into_iter().collect();
        self
    }

    /// Sets the IP address assigned to the network.
    #[must_use]
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Sets the reserved bandwidth in megabits.
    #[must_use]
    pub fn with_mbits(mut self, mbits: u32) -> Self {
        self.mbits = Some(mbits);
        self
    }

    /// Returns the assigned IP address, if any.
    #[must_use]
    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    /// Returns the reserved bandwidth in megabits, if any.
    #[must_use]
    pub const fn mbits(&self) -> Option<u32> {
        self.mbits
    }

    /// Returns the statically reserved ports.
    #[must_use]
    pub fn reserved_ports(&self) -> &[Port] {
        &self.reserved_ports
    }

    /// Returns the scheduler-assigned ports.
    #[must_use]
    pub fn dynamic_ports(&self) -> &[Port] {
        &self.dynamic_ports
    }
}

/// Resources requested by one task, matched to its state by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResources {
    task_name: TaskName,
    networks: Vec<NetworkResource>,
}

impl TaskResources {
    /// Creates a resources record without networks.
    #[must_use]
    pub const fn new(task_name: TaskName) -> Self {
        Self {
            task_name,
            networks: Vec::new(),
        }
    }

    /// Replaces the network descriptors.
    #[must_use]
    pub fn with_networks(mut self, networks: impl IntoIterator<Item = NetworkResource>) -> Self {
        self.networks = networks.into_iter().collect();
        self
    }

    /// Returns the name of the task these resources belong to.
    #[must_use]
    pub const fn task_name(&self) -> &TaskName {
        &self.task_name
    }

    /// Returns the network descriptors in declaration order.
    #[must_use]
    pub fn networks(&self) -> &[NetworkResource] {
        &self.networks
    }
}
