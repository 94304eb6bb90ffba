//! Settings file management

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::errors::DashboardError;
use crate::filesys::file::File;
use crate::logs::LogLevel;

/// Default settings file location
pub const DEFAULT_SETTINGS_PATH: &str = "/etc/theseus/dashboard.json";

/// Dashboard settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[serde(default)]
    pub log_json: bool,

    /// Also write daily log files to this directory
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Backend configuration
    #[serde(default)]
    pub backend: BackendSettings,
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Base URL the API paths are appended to
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    /// Per-request timeout; unset means wait for the backend
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_backend_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            request_timeout_secs: None,
        }
    }
}

impl BackendSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        validate_base_url(&self.base_url)
    }
}

/// Check a backend base URL is an absolute http(s) URL
pub fn validate_base_url(base_url: &str) -> Result<(), DashboardError> {
    let url = Url::parse(base_url)
        .map_err(|e| DashboardError::ConfigError(format!("invalid backend url {:?}: {}", base_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(DashboardError::ConfigError(format!(
            "unsupported backend url scheme: {}",
            scheme
        ))),
    }
}

/// Load settings, falling back to defaults when the file does not exist
pub async fn load_settings(file: &File) -> Result<Settings, DashboardError> {
    if !file.exists().await {
        info!("No settings file at {}, using defaults", file.path().display());
        return Ok(Settings::default());
    }

    let settings: Settings = file.read_json().await?;
    settings.backend.validate()?;
    Ok(settings)
}
