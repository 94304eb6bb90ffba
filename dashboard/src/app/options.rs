//! Application configuration options

use std::time::Duration;

use crate::errors::DashboardError;
use crate::logs::{LogLevel, LogOptions};
use crate::storage::settings::{validate_base_url, Settings};

/// Options the dashboard runs with, after CLI overrides
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Backend API base URL
    pub backend_base_url: String,

    /// Per-request timeout
    pub request_timeout: Option<Duration>,

    /// Logging configuration
    pub log: LogOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for AppOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            backend_base_url: settings.backend.base_url.clone(),
            request_timeout: settings.backend.request_timeout(),
            log: LogOptions {
                log_level: settings.log_level.clone(),
                json_format: settings.log_json,
                log_dir: settings.log_dir.clone(),
                ..Default::default()
            },
        }
    }
}

impl AppOptions {
    /// Apply `--base-url` and `--log-level` style overrides.
    ///
    /// An overriding base URL is held to the same check as the settings file.
    pub fn with_overrides(
        mut self,
        base_url: Option<&str>,
        log_level: Option<LogLevel>,
    ) -> Result<Self, DashboardError> {
        if let Some(base_url) = base_url {
            validate_base_url(base_url)?;
            self.backend_base_url = base_url.to_string();
        }
        if let Some(level) = log_level {
            self.log.log_level = level;
        }
        Ok(self)
    }
}
