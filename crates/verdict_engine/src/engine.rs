use std::any::Any;
use std::io;
use std::panic::AssertUnwindSafe;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use futures_util::FutureExt;
use verdict_core::AnalysisRequest;
use verdict_logging::{verdict_debug, verdict_error, verdict_warn};

use crate::analyzer::{AnalysisService, AnalysisSettings, HeuristicAnalyzer};
use crate::{AnalysisError, EngineEvent};

pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone)]
pub struct EngineConfig {
    pub settings: AnalysisSettings,
    /// Timestamp attached to every completion event.
    pub completed_utc: Clock,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settings: AnalysisSettings::default(),
            completed_utc: Arc::new(String::new),
        }
    }
}

enum EngineCommand {
    Analyze(AnalysisRequest),
}

/// Runs analysis requests on a background tokio runtime and hands the
/// outcomes back through a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> io::Result<Self> {
        let service = Arc::new(HeuristicAnalyzer::new(config.settings.clone()));
        Self::with_service(service, config.completed_utc)
    }

    pub fn with_service(service: Arc<dyn AnalysisService>, clock: Clock) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let service = service.clone();
                let event_tx = event_tx.clone();
                let clock = clock.clone();
                runtime.spawn(async move {
                    handle_command(service.as_ref(), command, event_tx, clock).await;
                });
            }
            verdict_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request: AnalysisRequest) {
        let request_id = request.request_id;
        if self.cmd_tx.send(EngineCommand::Analyze(request)).is_err() {
            verdict_warn!("Engine worker gone; request {} dropped", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event, or returns `None` once the worker is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    /// Like [`recv`](Self::recv) but gives up after `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    service: &dyn AnalysisService,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    clock: Clock,
) {
    match command {
        EngineCommand::Analyze(request) => {
            // A panicking service still completes the request as a failure.
            let result = match AssertUnwindSafe(service.analyze(&request))
                .catch_unwind()
                .await
            {
                Ok(result) => result,
                Err(panic) => {
                    let message = panic_message(panic.as_ref());
                    verdict_error!(
                        "Analysis for request {} panicked: {}",
                        request.request_id,
                        message
                    );
                    Err(AnalysisError::Internal(message))
                }
            };
            let _ = event_tx.send(EngineEvent::AnalysisCompleted {
                request_id: request.request_id,
                result,
                completed_utc: clock(),
            });
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "analysis service panicked".to_string()
    }
}
