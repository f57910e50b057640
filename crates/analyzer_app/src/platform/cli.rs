use std::fs;
use std::path::PathBuf;

use super::error::AppError;
use super::logging::LogDestination;

/// Analyze a PDF resume against a job description.
#[derive(Debug, Clone, clap::Parser)]
#[clap(name = "resume-analyzer", version)]
pub struct Cli {
    /// PDF resume to upload.
    #[clap(long, value_name = "PDF")]
    pub resume: PathBuf,
    /// Job description text.
    #[clap(
        long,
        value_name = "TEXT",
        conflicts_with = "job_file",
        required_unless_present = "job_file"
    )]
    pub job_description: Option<String>,
    /// Read the job description from a file instead.
    #[clap(long, value_name = "PATH")]
    pub job_file: Option<PathBuf>,
    /// RON configuration file.
    #[clap(long, env = "RESUME_ANALYZER_CONFIG", value_name = "RON")]
    pub config: Option<PathBuf>,
    /// Analysis endpoint, overriding the config file.
    #[clap(long, env = "RESUME_ANALYZER_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,
    /// URL probed for server status, overriding the config file.
    #[clap(long, value_name = "URL")]
    pub status_url: Option<String>,
    /// How long to wait for a sleeping server before submitting anyway.
    #[clap(long, value_name = "SECS")]
    pub wait_secs: Option<u64>,
    /// Print the analysis text as returned instead of the outline.
    #[clap(long)]
    pub raw: bool,
    /// Where log output goes.
    #[clap(long, value_enum, value_name = "DEST")]
    pub log: Option<LogDestination>,
    /// Log at debug level.
    #[clap(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn read_job_description(&self) -> Result<String, AppError> {
        match (&self.job_description, &self.job_file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => fs::read_to_string(path).map_err(|source| AppError::JobFile {
                path: path.clone(),
                source,
            }),
            // clap requires one of the two.
            (None, None) => Ok(String::new()),
        }
    }
}
