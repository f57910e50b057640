use crate::{AvailabilityStatus, FormattedOutline, Phase, SubmissionError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub status: StatusIndicator,
    pub submit: SubmitButton,
    /// File picker and description box accept input.
    pub inputs_enabled: bool,
    pub file_name: Option<String>,
    pub job_description_chars: usize,
    pub phase: Phase,
    pub error: Option<SubmissionError>,
    pub notice: Option<String>,
    pub outline: Option<FormattedOutline>,
    pub result_text: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusIndicator {
    pub status: AvailabilityStatus,
    pub label: &'static str,
}

impl StatusIndicator {
    pub fn for_status(status: AvailabilityStatus) -> Self {
        let label = match status {
            AvailabilityStatus::Live => "Server Live",
            AvailabilityStatus::Waking => "Server Waking",
            AvailabilityStatus::Offline => "Server Offline",
            AvailabilityStatus::Checking => "Checking...",
        };
        Self { status, label }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

impl SubmitButton {
    pub fn for_state(phase: Phase, status: AvailabilityStatus) -> Self {
        let (label, enabled) = if phase == Phase::InFlight {
            ("Analyzing...", false)
        } else {
            match status {
                AvailabilityStatus::Offline => ("Server Offline", false),
                AvailabilityStatus::Waking => ("Server Waking Up...", false),
                AvailabilityStatus::Live | AvailabilityStatus::Checking => ("Analyze Resume", true),
            }
        };
        Self { label, enabled }
    }
}
