use std::io;
use std::path::PathBuf;

use analyzer_engine::{ResumeLoadError, SettingsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("cannot read job description from {path:?}: {source}")]
    JobFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Resume(#[from] ResumeLoadError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("no reply from the analysis engine")]
    EngineStalled,
    #[error("cannot write report: {0}")]
    Output(#[from] io::Error),
}
