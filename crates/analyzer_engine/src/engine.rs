use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use analyzer_logging::{analyzer_debug, analyzer_info};

use crate::client::{AnalysisClient, AnalysisRequest, ReqwestAnalysisClient};
use crate::health::{ReqwestStatusProbe, StatusProbe};
use crate::{EngineEvent, EngineSettings, SettingsError, SubmissionId};

enum EngineCommand {
    Analyze {
        id: SubmissionId,
        request: AnalysisRequest,
    },
    CheckHealth,
}

/// Runs analysis requests and the status poller on a background runtime.
///
/// Commands go in through the handle, results come back as [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    shutdown: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: &EngineSettings) -> Result<Self, SettingsError> {
        let client = Arc::new(ReqwestAnalysisClient::new(settings)?);
        let probe = Arc::new(ReqwestStatusProbe::new(settings)?);
        Ok(Self::with_services(client, probe, settings.poll_interval))
    }

    pub fn with_services(
        client: Arc<dyn AnalysisClient>,
        probe: Arc<dyn StatusProbe>,
        poll_interval: Duration,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let shutdown = CancellationToken::new();
        let poller_shutdown = shutdown.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let recheck = Arc::new(Notify::new());

            runtime.spawn(poll_status(
                probe,
                poll_interval,
                recheck.clone(),
                event_tx.clone(),
                poller_shutdown.clone(),
            ));

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Analyze { id, request } => {
                        let client = client.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = client.analyze(&request).await;
                            let _ = event_tx.send(EngineEvent::AnalysisCompleted { id, result });
                        });
                    }
                    EngineCommand::CheckHealth => recheck.notify_one(),
                }
            }

            poller_shutdown.cancel();
            analyzer_debug!("Engine command channel closed");
        });

        Self {
            cmd_tx,
            event_rx,
            shutdown,
        }
    }

    pub fn analyze(&self, id: SubmissionId, request: AnalysisRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze { id, request });
    }

    /// Probe the server now instead of waiting for the next poll.
    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckHealth);
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn poll_status(
    probe: Arc<dyn StatusProbe>,
    interval: Duration,
    recheck: Arc<Notify>,
    event_tx: mpsc::Sender<EngineEvent>,
    shutdown: CancellationToken,
) {
    loop {
        let health = tokio::select! {
            _ = shutdown.cancelled() => break,
            health = probe.probe() => health,
        };
        if event_tx.send(EngineEvent::HealthChecked(health)).is_err() {
            break;
        }

        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
            _ = recheck.notified() => analyzer_debug!("Status re-check requested"),
        }
    }
    analyzer_info!("Status poller stopped");
}
