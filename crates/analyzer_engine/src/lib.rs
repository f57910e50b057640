//! Analyzer engine: network IO and effect execution.
mod client;
mod engine;
mod health;
mod resume;
mod settings;
mod types;

pub use client::{AnalysisClient, AnalysisRequest, ReqwestAnalysisClient};
pub use engine::EngineHandle;
pub use health::{ReqwestStatusProbe, StatusProbe};
pub use resume::{declared_media_type, load_resume, LoadedResume, ResumeLoadError};
pub use settings::{EngineSettings, SettingsError, DEFAULT_ENDPOINT};
pub use types::{
    AnalysisPayload, EngineEvent, FailureKind, ServerHealth, SubmissionId, TransportError,
};
