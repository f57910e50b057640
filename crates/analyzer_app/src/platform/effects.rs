use std::time::Duration;

use analyzer_core::{AnalysisReply, AvailabilityStatus, Effect, Msg};
use analyzer_engine::{
    AnalysisPayload, AnalysisRequest, EngineEvent, EngineHandle, EngineSettings, ServerHealth,
    SettingsError, TransportError,
};
use analyzer_logging::{analyzer_info, analyzer_trace, analyzer_warn};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: &EngineSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis {
                    id,
                    resume,
                    job_description,
                } => {
                    analyzer_info!(
                        "SubmitAnalysis id={} file={} bytes={} description_len={}",
                        id,
                        resume.name,
                        resume.bytes.len(),
                        job_description.len()
                    );
                    self.engine.analyze(
                        id,
                        AnalysisRequest {
                            file_name: resume.name,
                            media_type: resume.media_type,
                            resume: resume.bytes,
                            job_description,
                        },
                    );
                }
                Effect::RefreshAvailability => {
                    analyzer_info!("RefreshAvailability");
                    self.engine.check_health();
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine event.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    analyzer_trace!("Engine event: {:?}", event);
    match event {
        EngineEvent::HealthChecked(health) => Msg::AvailabilityChanged(map_health(health)),
        EngineEvent::AnalysisCompleted { id, result } => Msg::AnalysisReplied {
            id,
            reply: map_result(id, result),
        },
    }
}

fn map_health(health: ServerHealth) -> AvailabilityStatus {
    match health {
        ServerHealth::Live => AvailabilityStatus::Live,
        ServerHealth::Waking => AvailabilityStatus::Waking,
        ServerHealth::Offline => AvailabilityStatus::Offline,
    }
}

fn map_result(id: u64, result: Result<AnalysisPayload, TransportError>) -> AnalysisReply {
    match result {
        Ok(payload) => AnalysisReply::Payload {
            result: payload.result,
            analysis: payload.analysis,
            error: payload.error,
        },
        Err(err) => {
            analyzer_warn!("Submission {} failed: {}", id, err);
            AnalysisReply::Failed {
                status: err.status(),
                error: err.server_error,
            }
        }
    }
}
