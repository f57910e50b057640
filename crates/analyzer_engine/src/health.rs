use reqwest::StatusCode;
use url::Url;

use analyzer_logging::analyzer_debug;

use crate::client::map_reqwest_error;
use crate::{EngineSettings, FailureKind, ServerHealth, SettingsError};

#[async_trait::async_trait]
pub trait StatusProbe: Send + Sync {
    async fn probe(&self) -> ServerHealth;
}

/// Probes the server with a plain `GET`.
///
/// A sleeping host answers with a gateway error or not at all until it has
/// spun up, so those outcomes read as [`ServerHealth::Waking`]; refused
/// connections and other server failures read as offline.
#[derive(Debug, Clone)]
pub struct ReqwestStatusProbe {
    client: reqwest::Client,
    url: Url,
}

impl ReqwestStatusProbe {
    pub fn new(settings: &EngineSettings) -> Result<Self, SettingsError> {
        let url = settings.status_url()?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.probe_timeout)
            .build()
            .map_err(|err| SettingsError::Client(err.to_string()))?;
        Ok(Self { client, url })
    }
}

#[async_trait::async_trait]
impl StatusProbe for ReqwestStatusProbe {
    async fn probe(&self) -> ServerHealth {
        let health = match self.client.get(self.url.clone()).send().await {
            Ok(response) => health_for_status(response.status()),
            Err(err) => match map_reqwest_error(err).kind {
                FailureKind::Timeout => ServerHealth::Waking,
                _ => ServerHealth::Offline,
            },
        };
        analyzer_debug!("Status probe {} -> {:?}", self.url, health);
        health
    }
}

fn health_for_status(status: StatusCode) -> ServerHealth {
    match status {
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            ServerHealth::Waking
        }
        status if status.is_server_error() => ServerHealth::Offline,
        _ => ServerHealth::Live,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_errors_mean_waking() {
        assert_eq!(health_for_status(StatusCode::SERVICE_UNAVAILABLE), ServerHealth::Waking);
        assert_eq!(health_for_status(StatusCode::BAD_GATEWAY), ServerHealth::Waking);
    }

    #[test]
    fn any_non_server_error_means_live() {
        assert_eq!(health_for_status(StatusCode::OK), ServerHealth::Live);
        assert_eq!(health_for_status(StatusCode::NOT_FOUND), ServerHealth::Live);
        assert_eq!(health_for_status(StatusCode::METHOD_NOT_ALLOWED), ServerHealth::Live);
    }

    #[test]
    fn internal_error_means_offline() {
        assert_eq!(
            health_for_status(StatusCode::INTERNAL_SERVER_ERROR),
            ServerHealth::Offline
        );
    }
}
