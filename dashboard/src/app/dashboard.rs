//! Status panel and launch form flow

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::builder::config::build_request;
use crate::builder::form::FormSnapshot;
use crate::errors::DashboardError;
use crate::http::api::DashboardApi;
use crate::models::host::{host_options, HostOption};
use crate::render::status::StatusView;

/// Alert shown after a deployment was accepted
pub const DEPLOY_SUCCESS_ALERT: &str = "Container deployment initiated successfully!";

/// Page the dashboard reloads to after a deployment
pub const RELOAD_LOCATION: &str = "/";

/// What the page does after the deploy button was pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Show the alert, then reload at `location`
    Reload { alert: String, location: String },

    /// Show the alert and leave the form as it is
    Alert { alert: String },

    /// A submission was already in flight; the trigger is disabled
    Ignored,
}

/// Alert text for a failed deployment
pub fn deploy_failure_alert(err: &DashboardError) -> String {
    format!("Failed to deploy container: {}", err)
}

/// Drives the dashboard page against a backend
pub struct Dashboard {
    api: Arc<dyn DashboardApi>,
    submitting: AtomicBool,
}

/// Releases the single-flight flag when the submission resolves
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Dashboard {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            submitting: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently in flight
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Pull the container list and render the status panel
    pub async fn load_status(&self) -> StatusView {
        let result = self.api.list_running_containers().await;
        if let Err(e) = &result {
            warn!("Status poll failed, showing placeholder: {}", e);
        }
        StatusView::from_poll(result)
    }

    /// Pull the host machines for the host selector
    pub async fn load_host_options(&self) -> Result<Vec<HostOption>, DashboardError> {
        let hosts = self.api.list_host_machines().await?;
        Ok(host_options(&hosts))
    }

    /// Build the request from the form and submit it.
    ///
    /// Only one submission may be in flight; a second call while the first is
    /// pending fails with [`DashboardError::SubmissionInFlight`] without
    /// reaching the backend.
    pub async fn submit(&self, form: &FormSnapshot) -> Result<(), DashboardError> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(DashboardError::SubmissionInFlight);
        }
        let _in_flight = InFlight(&self.submitting);

        let request = build_request(form);
        self.api.submit_deployment(&request).await?;

        info!("Deployment of {:?} accepted", request.name);
        Ok(())
    }

    /// Handle a press of the deploy button
    pub async fn on_deploy(&self, form: &FormSnapshot) -> SubmitOutcome {
        match self.submit(form).await {
            Ok(()) => SubmitOutcome::Reload {
                alert: DEPLOY_SUCCESS_ALERT.to_string(),
                location: RELOAD_LOCATION.to_string(),
            },
            Err(DashboardError::SubmissionInFlight) => SubmitOutcome::Ignored,
            Err(e) => {
                error!("Deployment failed: {}", e);
                SubmitOutcome::Alert {
                    alert: deploy_failure_alert(&e),
                }
            }
        }
    }
}
