//! Merges reserved and dynamic port pools into a labelled address list.

use super::{HostAddress, Port, TaskResources};
use serde::Serialize;

/// One addressable endpoint of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskAddress {
    label: String,
    port: u16,
    is_dynamic: bool,
    address: String,
}

impl TaskAddress {
    /// Returns the port label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the port number.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether the port was assigned by the scheduler.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        self.is_dynamic
    }

    /// Returns the displayable `host:port` value.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Address section of the task view.
///
/// `None` means the section is omitted entirely; `Listed` with an empty
/// vector would render an empty table and is never produced by
/// [`merge_ports`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum TaskAddresses {
    /// The task declares no network.
    None,
    /// Addresses sorted by label.
    Listed(Vec<TaskAddress>),
}

impl TaskAddresses {
    /// Returns the listed addresses, or an empty slice when there are none.
    #[must_use]
    pub fn entries(&self) -> &[TaskAddress] {
        match self {
            Self::None => &[],
            Self::Listed(entries) => entries,
        }
    }

    /// Returns whether the address section should be shown.
    #[must_use]
    pub const fn is_listed(&self) -> bool {
        matches!(self, Self::Listed(_))
    }
}

/// Builds the address list for a task.
///
/// Reserved ports come first, then dynamic ports, each in declaration order;
/// the result is then stably sorted by label. A port is dynamic when it is not
/// one of the entries of the reserved list, so equal port values in both
/// pools are still told apart. Only the first network is listed, and a
/// network without ports lists nothing.
#[must_use]
pub fn merge_ports(resources: Option<&TaskResources>, host: &HostAddress) -> TaskAddresses {
    let Some(network) = resources.and_then(|found| found.networks().first()) else {
        return TaskAddresses::None;
    };

    let reserved = network.reserved_ports();
    let mut candidates: Vec<&Port> = reserved
        .iter()
        .chain(network.dynamic_ports().iter())
        .collect();
    if candidates.is_empty() {
        return TaskAddresses::None;
    }
    candidates.sort_by(|left, right| left.label().cmp(right.label()));

    let entries = candidates
        .into_iter()
        .map(|port| TaskAddress {
            label: port.label().to_owned(),
            port: port.value(),
            is_dynamic: !reserved.iter().any(|entry| std::ptr::eq(entry, port)),
            address: host.with_port(port.value()),
        })
        .collect();
    TaskAddresses::Listed(entries)
}
