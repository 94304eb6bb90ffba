//! Backend seam used by the page flow

use async_trait::async_trait;

use crate::errors::DashboardError;
use crate::http::client::HttpClient;
use crate::models::container::RemoteContainer;
use crate::models::deployment::DeploymentRequest;
use crate::models::host::RemoteHostMachine;

/// The three backend operations the dashboard depends on
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn list_running_containers(&self) -> Result<Vec<RemoteContainer>, DashboardError>;

    async fn list_host_machines(&self) -> Result<Vec<RemoteHostMachine>, DashboardError>;

    async fn submit_deployment(&self, request: &DeploymentRequest) -> Result<(), DashboardError>;
}

#[async_trait]
impl DashboardApi for HttpClient {
    async fn list_running_containers(&self) -> Result<Vec<RemoteContainer>, DashboardError> {
        HttpClient::list_running_containers(self).await
    }

    async fn list_host_machines(&self) -> Result<Vec<RemoteHostMachine>, DashboardError> {
        HttpClient::list_host_machines(self).await
    }

    async fn submit_deployment(&self, request: &DeploymentRequest) -> Result<(), DashboardError> {
        HttpClient::submit_deployment(self, request).await
    }
}
