use bytes::Bytes;

use crate::format::format_result;
use crate::view_model::{AppViewModel, StatusIndicator, SubmitButton};

/// Media type a resume must declare to be accepted.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

pub type SubmissionId = u64;

/// Server reachability as reported by the status poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityStatus {
    #[default]
    Checking,
    Live,
    Waking,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected locally, never sent over the network.
    Validation,
    RateLimited,
    ServerError,
    NetworkError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError {
    pub kind: ErrorKind,
    pub message: String,
}

/// A resume picked by the user, with the media type it was declared as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Bytes,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    file: Option<ResumeFile>,
    job_description: String,
    availability: AvailabilityStatus,
    phase: Phase,
    result_text: Option<String>,
    error: Option<SubmissionError>,
    notice: Option<String>,
    in_flight: Option<SubmissionId>,
    next_submission_id: SubmissionId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&ResumeFile> {
        self.file.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn availability(&self) -> AvailabilityStatus {
        self.availability
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result_text(&self) -> Option<&str> {
        self.result_text.as_deref()
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        self.error.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn in_flight(&self) -> Option<SubmissionId> {
        self.in_flight
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            status: StatusIndicator::for_status(self.availability),
            submit: SubmitButton::for_state(self.phase, self.availability),
            inputs_enabled: matches!(
                self.availability,
                AvailabilityStatus::Live | AvailabilityStatus::Waking
            ),
            file_name: self.file.as_ref().map(|file| file.name.clone()),
            job_description_chars: self.job_description.chars().count(),
            phase: self.phase,
            error: self.error.clone(),
            notice: self.notice.clone(),
            outline: match self.phase {
                Phase::Succeeded => self.result_text.as_deref().map(format_result),
                _ => None,
            },
            result_text: self.result_text.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_file(&mut self, file: Option<ResumeFile>) {
        self.file = file;
        self.mark_dirty();
    }

    pub(crate) fn set_job_description(&mut self, text: String) {
        self.job_description = text;
        self.mark_dirty();
    }

    pub(crate) fn set_availability(&mut self, status: AvailabilityStatus) {
        if self.availability != status {
            self.availability = status;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_notice(&mut self, notice: Option<String>) {
        if self.notice != notice {
            self.notice = notice;
            self.mark_dirty();
        }
    }

    /// Moves to `InFlight` under a fresh id and clears the previous outcome.
    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.next_submission_id += 1;
        let id = self.next_submission_id;
        self.phase = Phase::InFlight;
        self.in_flight = Some(id);
        self.result_text = None;
        self.error = None;
        self.mark_dirty();
        id
    }

    pub(crate) fn succeed(&mut self, text: String) {
        self.phase = Phase::Succeeded;
        self.in_flight = None;
        self.result_text = Some(text);
        self.error = None;
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self, kind: ErrorKind, message: impl Into<String>) {
        self.phase = Phase::Failed;
        self.in_flight = None;
        self.result_text = None;
        self.error = Some(SubmissionError {
            kind,
            message: message.into(),
        });
        self.mark_dirty();
    }
}
