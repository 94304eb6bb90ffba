//! Container models

pub use openapi_client::models::ContainerInfo as RemoteContainer;

/// Container status as the dashboard presents it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStatus {
    Running,
    Restarting,
    /// Stopped, absent or any status the dashboard does not know
    Stopped,
}

impl ContainerStatus {
    /// Classify a raw backend status; matching is exact
    pub fn classify(raw: &str) -> Self {
        match raw {
            "running" => ContainerStatus::Running,
            "restarting" => ContainerStatus::Restarting,
            _ => ContainerStatus::Stopped,
        }
    }
}

impl From<&RemoteContainer> for ContainerStatus {
    fn from(container: &RemoteContainer) -> Self {
        ContainerStatus::classify(&container.status)
    }
}
