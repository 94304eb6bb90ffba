//! Host machine API client

use tracing::warn;

use crate::errors::DashboardError;
use crate::http::client::HttpClient;
use crate::models::host::RemoteHostMachine;

pub const RUNNING_HOSTS_PATH: &str = "/api/hostmachine/running";

impl HttpClient {
    /// List the host machines containers can be deployed to
    pub async fn list_host_machines(&self) -> Result<Vec<RemoteHostMachine>, DashboardError> {
        self.get(RUNNING_HOSTS_PATH).await.inspect_err(|_| {
            warn!("error fetching active host machines");
        })
    }
}
