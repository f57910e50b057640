use std::fmt;

pub type SubmissionId = u64;

/// What the poller concluded about the analysis server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerHealth {
    Live,
    Waking,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalysisCompleted {
        id: SubmissionId,
        result: Result<AnalysisPayload, TransportError>,
    },
    HealthChecked(ServerHealth),
}

/// String fields lifted from a successful response body. Anything that is
/// not a JSON object, or a field that is not a string, reads as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisPayload {
    pub result: Option<String>,
    pub analysis: Option<String>,
    pub error: Option<String>,
}

impl AnalysisPayload {
    pub fn from_body(body: &[u8]) -> Self {
        let value = match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };
        let field = |name: &str| value.get(name).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            result: field("result"),
            analysis: field("analysis"),
            error: field("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: FailureKind,
    /// `error` field of the response body, when a response arrived with one.
    pub server_error: Option<String>,
    pub message: String,
}

impl TransportError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            server_error: None,
            message: message.into(),
        }
    }

    /// HTTP status of the response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::HttpStatus(code) => Some(code),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
