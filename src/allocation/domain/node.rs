//! Client node records and host address parsing.

use super::NodeId;
use serde::{Deserialize, Serialize};

/// Client node an allocation is placed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    name: String,
    http_addr: String,
}

impl Node {
    /// Creates a node record.
    ///
    /// `http_addr` is the stored `host[:port]` string of the node's agent.
    #[must_use]
    pub fn new(id: NodeId, name: impl Into<String>, http_addr: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            http_addr: http_addr.into(),
        }
    }

    /// Returns the node identifier.
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        &self.id
    }

    /// Returns the node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw stored address.
    #[must_use]
    pub fn http_addr(&self) -> &str {
        &self.http_addr
    }

    /// Parses the stored address into host and port parts.
    #[must_use]
    pub fn host_address(&self) -> HostAddress {
        parse_host_address(&self.http_addr)
    }
}

/// Host and optional port split out of a combined address string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostAddress {
    host: String,
    port: Option<u16>,
}

impl HostAddress {
    /// Returns the host portion. IPv6 hosts keep their brackets so the value
    /// can be joined with a port directly.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port parsed from the original string, if any.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Joins the host with another port, discarding the parsed one.
    #[must_use]
    pub fn with_port(&self, port: u16) -> String {
        format!("{}:{port}", self.host)
    }
}

/// Splits `host`, `host:port`, `[v6]:port` or a bare IPv6 literal.
///
/// The function does no name resolution. A port suffix that is not a valid
/// `u16` is dropped.
#[must_use]
pub fn parse_host_address(raw: &str) -> HostAddress {
    let trimmed = raw.trim();

    if let Some(rest) = trimmed.strip_prefix('[') {
        let (inner, suffix) = rest.split_once(']').unwrap_or((rest, ""));
        return HostAddress {
            host: format!("[{inner}]"),
            port: suffix.strip_prefix(':').and_then(parse_port),
        };
    }

    match trimmed.matches(':').count() {
        0 => HostAddress {
            host: trimmed.to_owned(),
            port: None,
        },
        1 => {
            let (host, port) = trimmed.split_once(':').unwrap_or((trimmed, ""));
            HostAddress {
                host: host.to_owned(),
                port: parse_port(port),
            }
        }
        _ => HostAddress {
            host: format!("[{trimmed}]"),
            port: None,
        },
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.parse().ok()
}
