use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use url::Url;

use analyzer_logging::{analyzer_debug, analyzer_info, analyzer_warn, log_preview};

use crate::{AnalysisPayload, EngineSettings, FailureKind, SettingsError, TransportError};

/// Everything one analysis request carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub file_name: String,
    pub media_type: String,
    pub resume: Bytes,
    pub job_description: String,
}

#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisPayload, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    client: reqwest::Client,
    endpoint: Url,
    max_response_bytes: u64,
}

impl ReqwestAnalysisClient {
    pub fn new(settings: &EngineSettings) -> Result<Self, SettingsError> {
        let endpoint = settings.endpoint_url()?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SettingsError::Client(err.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            max_response_bytes: settings.max_response_bytes,
        })
    }

    fn build_form(request: &AnalysisRequest) -> Result<Form, TransportError> {
        let resume = Part::bytes(request.resume.to_vec())
            .file_name(request.file_name.clone())
            .mime_str(&request.media_type)
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))?;
        Ok(Form::new()
            .part("resume", resume)
            .text("job_description", request.job_description.clone()))
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ReqwestAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisPayload, TransportError> {
        let form = Self::build_form(request)?;
        analyzer_info!(
            "POST {} resume={} ({} bytes) job_description_chars={}",
            self.endpoint,
            request.file_name,
            request.resume.len(),
            request.job_description.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = read_body(response, self.max_response_bytes).await;

        if !status.is_success() {
            let server_error = body
                .ok()
                .and_then(|bytes| AnalysisPayload::from_body(&bytes).error);
            analyzer_warn!(
                "Analysis endpoint answered {} (error field: {:?})",
                status,
                server_error
            );
            return Err(TransportError {
                kind: FailureKind::HttpStatus(status.as_u16()),
                server_error,
                message: status.to_string(),
            });
        }

        let body = body?;
        analyzer_debug!(
            "Analysis response body: {}",
            log_preview(&String::from_utf8_lossy(&body), 200)
        );
        Ok(AnalysisPayload::from_body(&body))
    }
}

async fn read_body(response: reqwest::Response, max_bytes: u64) -> Result<Vec<u8>, TransportError> {
    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(max_bytes, Some(content_len)));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(map_reqwest_error)?;
        let next_len = bytes.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(too_large(max_bytes, Some(next_len)));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> TransportError {
    TransportError::new(FailureKind::TooLarge { max_bytes, actual }, "response too large")
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return TransportError::new(FailureKind::InvalidUrl, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
