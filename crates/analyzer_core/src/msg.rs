#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked or dropped a resume file.
    FileSelected(crate::ResumeFile),
    /// User removed the selected resume.
    FileCleared,
    /// User edited the job description.
    JobDescriptionChanged(String),
    /// User pressed the analyze button.
    SubmitClicked,
    /// The analysis request finished, one way or another.
    AnalysisReplied {
        id: crate::SubmissionId,
        reply: AnalysisReply,
    },
    /// Status poller reported server availability.
    AvailabilityChanged(crate::AvailabilityStatus),
    /// User acknowledged the current notice.
    NoticeDismissed,
}

/// Transport-neutral shape of an analysis response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisReply {
    /// A successful HTTP exchange; string fields lifted from the JSON body.
    Payload {
        result: Option<String>,
        analysis: Option<String>,
        error: Option<String>,
    },
    /// The request failed. `status` is absent when no response arrived.
    Failed {
        status: Option<u16>,
        error: Option<String>,
    },
}
