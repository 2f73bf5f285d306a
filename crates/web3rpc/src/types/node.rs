//! P2P node and peer descriptions from the admin namespace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The local node as reported by `admin_nodeInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub id: String,
    pub name: String,
    pub enode: String,
    #[serde(default)]
    pub enr: String,
    pub ip: String,
    pub ports: NodePorts,
    pub listen_addr: String,
    /// Per-protocol metadata; shape depends on the protocol.
    #[serde(default)]
    pub protocols: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePorts {
    pub discovery: u16,
    pub listener: u16,
}

/// A connected peer from `admin_peers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enr: Option<String>,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub caps: Vec<String>,
    pub network: PeerNetworkInfo,
    #[serde(default)]
    pub protocols: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerNetworkInfo {
    pub local_address: String,
    pub remote_address: String,
    pub inbound: bool,
    pub trusted: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
}
