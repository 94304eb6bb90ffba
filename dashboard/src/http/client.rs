//! HTTP client implementation

use std::time::Duration;

use openapi_client::models::ErrorResponse;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::errors::DashboardError;

/// HTTP client for the management API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client without a request timeout
    pub fn new(base_url: &str) -> Result<Self, DashboardError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a new HTTP client, optionally bounding each request
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, DashboardError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request and decode the JSON reply
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.inspect_err(|e| {
            error!("HTTP GET {} failed: {}", path, e);
        })?;
        let response = check_status("GET", response).await?;

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            error!("HTTP GET {} returned an unexpected body: {}", path, e);
            DashboardError::Decode(e.to_string())
        })
    }

    /// Make a POST request with a JSON body; the reply body is not read
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), DashboardError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await.inspect_err(|e| {
            error!("HTTP POST {} failed: {}", path, e);
        })?;
        check_status("POST", response).await?;
        Ok(())
    }
}

/// Turn a non-success reply into a transport error
async fn check_status(method: &str, response: Response) -> Result<Response, DashboardError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let body = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => err.error,
        Err(_) => body,
    };
    error!("HTTP {} failed: {} - {}", method, status, body);

    Err(DashboardError::Transport {
        status: status.as_u16(),
        body,
    })
}
