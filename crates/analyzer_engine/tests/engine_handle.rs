use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use analyzer_engine::{
    AnalysisClient, AnalysisPayload, AnalysisRequest, EngineEvent, EngineHandle, ServerHealth,
    StatusProbe, TransportError,
};

const WAIT: Duration = Duration::from_secs(5);

struct EchoClient;

#[async_trait::async_trait]
impl AnalysisClient for EchoClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisPayload, TransportError> {
        Ok(AnalysisPayload {
            result: Some(format!("analyzed {}", request.file_name)),
            ..AnalysisPayload::default()
        })
    }
}

#[derive(Default)]
struct CountingProbe {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl StatusProbe for CountingProbe {
    async fn probe(&self) -> ServerHealth {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ServerHealth::Live
    }
}

fn request() -> AnalysisRequest {
    AnalysisRequest {
        file_name: "cv.pdf".to_string(),
        media_type: "application/pdf".to_string(),
        resume: bytes::Bytes::from_static(b"%PDF"),
        job_description: "QA".to_string(),
    }
}

fn next_completion(engine: &EngineHandle) -> Option<EngineEvent> {
    loop {
        match engine.recv_timeout(WAIT)? {
            EngineEvent::HealthChecked(_) => continue,
            other => return Some(other),
        }
    }
}

#[test]
fn poller_reports_immediately() {
    let probe = Arc::new(CountingProbe::default());
    let engine = EngineHandle::with_services(
        Arc::new(EchoClient),
        probe.clone(),
        Duration::from_secs(3600),
    );

    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::HealthChecked(ServerHealth::Live))
    );
    assert_eq!(probe.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn check_health_triggers_another_probe() {
    let probe = Arc::new(CountingProbe::default());
    let engine = EngineHandle::with_services(
        Arc::new(EchoClient),
        probe.clone(),
        Duration::from_secs(3600),
    );
    assert!(engine.recv_timeout(WAIT).is_some());

    engine.check_health();

    assert_eq!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::HealthChecked(ServerHealth::Live))
    );
    assert_eq!(probe.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn analyze_reports_completion_with_id() {
    let engine = EngineHandle::with_services(
        Arc::new(EchoClient),
        Arc::new(CountingProbe::default()),
        Duration::from_secs(3600),
    );

    engine.analyze(7, request());

    assert_eq!(
        next_completion(&engine),
        Some(EngineEvent::AnalysisCompleted {
            id: 7,
            result: Ok(AnalysisPayload {
                result: Some("analyzed cv.pdf".to_string()),
                ..AnalysisPayload::default()
            }),
        })
    );
}
