//! Deployment submission

use tracing::{info, warn};

use crate::errors::DashboardError;
use crate::http::client::HttpClient;
use crate::models::deployment::DeploymentRequest;

pub const CREATE_WEBTOP_PATH: &str = "/api/webtop/create";

impl HttpClient {
    /// Submit a deployment. All or nothing: any non-2xx reply fails the call.
    pub async fn submit_deployment(&self, request: &DeploymentRequest) -> Result<(), DashboardError> {
        info!("Deploying container {:?} ({})", request.name, request.resolved_image());

        self.post(CREATE_WEBTOP_PATH, &request.to_wire())
            .await
            .inspect_err(|_| {
                warn!("error creating webtop container");
            })
    }
}
