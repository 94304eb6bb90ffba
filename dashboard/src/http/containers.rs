//! Container API client

use tracing::warn;

use crate::errors::DashboardError;
use crate::http::client::HttpClient;
use crate::models::container::RemoteContainer;

pub const RUNNING_CONTAINERS_PATH: &str = "/api/containers/running";

impl HttpClient {
    /// List the containers known to the backend
    pub async fn list_running_containers(&self) -> Result<Vec<RemoteContainer>, DashboardError> {
        self.get(RUNNING_CONTAINERS_PATH).await.inspect_err(|_| {
            warn!("error fetching active docker containers");
        })
    }
}
