use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use verdict_core::{AnalysisFailure, Effect, Msg};
use verdict_engine::{AnalysisSettings, EngineConfig, EngineEvent, EngineHandle};
use verdict_logging::{verdict_info, verdict_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: AnalysisSettings) -> std::io::Result<Self> {
        let config = EngineConfig {
            settings,
            completed_utc: Arc::new(|| Utc::now().to_rfc3339()),
        };
        Ok(Self {
            engine: EngineHandle::new(config)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Analyze(request) => {
                    verdict_info!(
                        "Analyze request_id={} mode={:?}",
                        request.request_id,
                        request.mode
                    );
                    self.engine.submit(request);
                }
            }
        }
    }

    /// Blocks up to `timeout` for the next finished analysis.
    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }

    /// Drains finished analyses as core messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisCompleted {
            request_id,
            result,
            completed_utc,
        } => match result {
            Ok(result) => {
                verdict_info!("Request {} completed at {}", request_id, completed_utc);
                Msg::AnalysisDone { request_id, result }
            }
            Err(err) => {
                verdict_warn!("Request {} failed at {}: {}", request_id, completed_utc, err);
                Msg::AnalysisFailed {
                    request_id,
                    failure: AnalysisFailure::new(err.to_string()),
                }
            }
        },
    }
}
