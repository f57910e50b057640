use crate::{ResumeFile, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one multipart analysis request.
    SubmitAnalysis {
        id: SubmissionId,
        resume: ResumeFile,
        job_description: String,
    },
    /// Ask the status poller to probe the server again now.
    RefreshAvailability,
}
