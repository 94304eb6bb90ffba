//! API models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Host machine as listed by `GET /api/hostmachine/running`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostMachine {
    pub id: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub status: String,
}

/// Container as listed by `GET /api/containers/running`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerInfo {
    pub id: String,
    pub name: String,
    /// Image reference. Older backends send it as `container`.
    #[serde(default, alias = "container")]
    pub image: String,
    /// Raw status string, e.g. running, restarting, stopped
    #[serde(default)]
    pub status: String,
}

/// Host/container port pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortBinding {
    pub external: i64,
    pub internal: i64,
}

/// Body of `POST /api/webtop/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContainerRequest {
    pub name: String,

    /// Container type: 'normal' or 'webtop'
    #[serde(rename = "type")]
    pub container_type: String,

    /// Resolved image reference
    pub container: String,

    #[serde(rename = "desktopEnv", default, skip_serializing_if = "Option::is_none")]
    pub desktop_env: Option<String>,

    pub hostmachine: HostMachine,

    pub restartpolicy: String,

    #[serde(default)]
    pub ports: Vec<PortBinding>,

    #[serde(default)]
    pub environmentvariables: BTreeMap<String, String>,

    #[serde(default)]
    pub volumemounts: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shmsize: Option<String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
