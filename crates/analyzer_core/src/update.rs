use crate::{AnalysisReply, AppState, AvailabilityStatus, Effect, ErrorKind, Msg, Phase};

/// User-facing texts produced by the controller.
pub mod messages {
    pub const PDF_ONLY: &str = "Please upload a PDF file only.";
    pub const MISSING_INPUT: &str = "Please upload a resume and enter a job description.";
    pub const SERVER_WAKING: &str = "Server is waking up. Please wait a moment and try again.";
    pub const SERVER_OFFLINE: &str =
        "Server is offline. Please check your connection or try again later.";
    pub const SERVER_ERROR_PREFIX: &str = "Server responded with an error: ";
    pub const UNEXPECTED_RESPONSE: &str = "Unexpected response from server.";
    pub const RATE_LIMITED: &str = "Rate limit exceeded. Please try again in a few minutes.";
    pub const ERROR_FROM_SERVER_PREFIX: &str = "Error from server: ";
    pub const NETWORK_ERROR: &str = "Network error. Please check your connection or try again.";
}

const TOO_MANY_REQUESTS: u16 = 429;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileSelected(file) => {
            if file.is_pdf() {
                state.set_file(Some(file));
                state.set_notice(None);
            } else {
                state.set_notice(Some(messages::PDF_ONLY.to_string()));
            }
            Vec::new()
        }
        Msg::FileCleared => {
            if state.file().is_some() {
                state.set_file(None);
            }
            Vec::new()
        }
        Msg::JobDescriptionChanged(text) => {
            if state.job_description() != text {
                state.set_job_description(text);
            }
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::AnalysisReplied { id, reply } => {
            // Only the reply to the request currently in flight is applied.
            if state.in_flight() != Some(id) {
                return (state, Vec::new());
            }
            apply_reply(&mut state, reply)
        }
        Msg::AvailabilityChanged(status) => {
            state.set_availability(status);
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.set_notice(None);
            Vec::new()
        }
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    if state.phase() == Phase::InFlight {
        return Vec::new();
    }

    let resume = state
        .file()
        .filter(|_| !state.job_description().is_empty())
        .cloned();
    let Some(resume) = resume else {
        state.fail(ErrorKind::Validation, messages::MISSING_INPUT);
        return Vec::new();
    };

    match state.availability() {
        AvailabilityStatus::Waking => {
            state.fail(ErrorKind::Validation, messages::SERVER_WAKING);
            return Vec::new();
        }
        AvailabilityStatus::Offline => {
            state.fail(ErrorKind::Validation, messages::SERVER_OFFLINE);
            return Vec::new();
        }
        AvailabilityStatus::Live | AvailabilityStatus::Checking => {}
    }

    let job_description = state.job_description().to_string();
    let id = state.begin_submission();
    vec![Effect::SubmitAnalysis {
        id,
        resume,
        job_description,
    }]
}

fn apply_reply(state: &mut AppState, reply: AnalysisReply) -> Vec<Effect> {
    match reply {
        AnalysisReply::Payload {
            result,
            analysis,
            error,
        } => {
            if let Some(text) = non_empty(result).or_else(|| non_empty(analysis)) {
                state.succeed(text);
            } else if let Some(error) = non_empty(error) {
                state.fail(
                    ErrorKind::ServerError,
                    format!("{}{error}", messages::SERVER_ERROR_PREFIX),
                );
            } else {
                state.fail(ErrorKind::ServerError, messages::UNEXPECTED_RESPONSE);
            }
            Vec::new()
        }
        AnalysisReply::Failed { status, error } => {
            if status == Some(TOO_MANY_REQUESTS) {
                state.fail(ErrorKind::RateLimited, messages::RATE_LIMITED);
                Vec::new()
            } else if let Some(error) = non_empty(error) {
                state.fail(
                    ErrorKind::ServerError,
                    format!("{}{error}", messages::ERROR_FROM_SERVER_PREFIX),
                );
                Vec::new()
            } else {
                state.fail(ErrorKind::NetworkError, messages::NETWORK_ERROR);
                vec![Effect::RefreshAvailability]
            }
        }
    }
}

/// Empty strings count as missing fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
