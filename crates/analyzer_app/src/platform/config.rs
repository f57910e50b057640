use std::fs;
use std::path::Path;
use std::time::Duration;

use analyzer_engine::{EngineSettings, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};

use super::cli::Cli;
use super::error::AppError;
use super::logging::LogDestination;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

/// Settings read from an optional RON file; unset fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub status_url: Option<String>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub poll_interval_secs: u64,
    pub wait_for_server_secs: u64,
    pub max_response_kib: u64,
    pub log: LogDestination,
    pub footer_links: Vec<FooterLink>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let engine = EngineSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            status_url: None,
            connect_timeout_secs: engine.connect_timeout.as_secs(),
            request_timeout_secs: engine.request_timeout.as_secs(),
            poll_interval_secs: engine.poll_interval.as_secs(),
            wait_for_server_secs: 90,
            max_response_kib: engine.max_response_bytes / 1024,
            log: LogDestination::File,
            footer_links: vec![FooterLink {
                label: "Analysis service".to_string(),
                url: "https://ai-resume-analyzer-htsu.onrender.com/".to_string(),
            }],
        }
    }
}

impl AppConfig {
    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }

    /// Command-line flags take precedence over file values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(status_url) = &cli.status_url {
            self.status_url = Some(status_url.clone());
        }
        if let Some(wait) = cli.wait_secs {
            self.wait_for_server_secs = wait;
        }
        if let Some(log) = cli.log {
            self.log = log;
        }
        self
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            endpoint: self.endpoint.clone(),
            status_url: self.status_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            poll_interval: Duration::from_secs(self.poll_interval_secs.max(1)),
            max_response_bytes: self.max_response_kib.saturating_mul(1024),
            ..EngineSettings::default()
        }
    }

    pub fn wait_for_server(&self) -> Duration {
        Duration::from_secs(self.wait_for_server_secs)
    }
}
