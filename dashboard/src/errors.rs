//! Error types for the Theseus dashboard

use thiserror::Error;

/// Main error type for the dashboard client
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Backend replied with a non-success status
    #[error("HTTP error, status : {status}{}", body_suffix(.body))]
    Transport { status: u16, body: String },

    /// Reply body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("A deployment submission is already in flight")]
    SubmissionInFlight,
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

impl DashboardError {
    /// HTTP status of a transport failure
    pub fn status(&self) -> Option<u16> {
        match self {
            DashboardError::Transport { status, .. } => Some(*status),
            DashboardError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
