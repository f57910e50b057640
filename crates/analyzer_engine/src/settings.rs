use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://ai-resume-analyzer-htsu.onrender.com/analyze/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid {field} url {value:?}: {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("http client could not be built: {0}")]
    Client(String),
}

#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Where the multipart analysis request is posted.
    pub endpoint: String,
    /// Probed by the status poller. Defaults to the endpoint's origin.
    pub status_url: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub probe_timeout: Duration,
    pub poll_interval: Duration,
    pub max_response_bytes: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            status_url: None,
            connect_timeout: Duration::from_secs(10),
            // Analysis runs a model server-side and a sleeping host needs time to spin up.
            request_timeout: Duration::from_secs(180),
            probe_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_secs(30),
            max_response_bytes: 2 * 1024 * 1024,
        }
    }
}

impl EngineSettings {
    pub fn endpoint_url(&self) -> Result<Url, SettingsError> {
        parse_http_url("endpoint", &self.endpoint)
    }

    pub fn status_url(&self) -> Result<Url, SettingsError> {
        match &self.status_url {
            Some(raw) => parse_http_url("status", raw),
            None => {
                let endpoint = self.endpoint_url()?;
                endpoint.join("/").map_err(|err| SettingsError::InvalidUrl {
                    field: "status",
                    value: self.endpoint.clone(),
                    reason: err.to_string(),
                })
            }
        }
    }
}

fn parse_http_url(field: &'static str, raw: &str) -> Result<Url, SettingsError> {
    let invalid = |reason: String| SettingsError::InvalidUrl {
        field,
        value: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}
