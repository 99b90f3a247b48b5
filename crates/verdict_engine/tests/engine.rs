use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use verdict_core::{AnalysisRequest, AnalysisResult, ContentPayload, InputMode};
use verdict_engine::{
    AnalysisError, AnalysisService, AnalysisSettings, EngineConfig, EngineEvent, EngineHandle,
};

/// Deterministic fake that records every request it sees.
#[derive(Default)]
struct RecordingService {
    seen: Mutex<Vec<AnalysisRequest>>,
}

#[async_trait::async_trait]
impl AnalysisService for RecordingService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        self.seen.lock().unwrap().push(request.clone());
        match &request.payload {
            ContentPayload::Text(text) if text == "fail" => {
                Err(AnalysisError::Internal("backend down".to_string()))
            }
            _ => Ok(AnalysisResult {
                verdict: "Likely Real".to_string(),
                confidence: 77,
                notes: "fake".to_string(),
            }),
        }
    }
}

struct PanickingService;

#[async_trait::async_trait]
impl AnalysisService for PanickingService {
    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        panic!("service bug");
    }
}

fn text_request(request_id: u64, text: &str) -> AnalysisRequest {
    AnalysisRequest {
        request_id,
        mode: InputMode::Text,
        payload: ContentPayload::Text(text.to_string()),
    }
}

#[test]
fn engine_reports_result_with_timestamp() {
    let service = Arc::new(RecordingService::default());
    let engine = EngineHandle::with_service(
        service.clone(),
        Arc::new(|| "2026-01-01T00:00:00Z".to_string()),
    )
    .expect("engine");

    engine.submit(text_request(3, "claim"));
    let event = engine.recv().expect("event");

    assert_eq!(
        event,
        EngineEvent::AnalysisCompleted {
            request_id: 3,
            result: Ok(AnalysisResult {
                verdict: "Likely Real".to_string(),
                confidence: 77,
                notes: "fake".to_string(),
            }),
            completed_utc: "2026-01-01T00:00:00Z".to_string(),
        }
    );
    assert_eq!(service.seen.lock().unwrap().len(), 1);
}

#[test]
fn engine_reports_service_failure() {
    let engine = EngineHandle::with_service(
        Arc::new(RecordingService::default()),
        Arc::new(String::new),
    )
    .expect("engine");

    engine.submit(text_request(9, "fail"));
    let EngineEvent::AnalysisCompleted {
        request_id, result, ..
    } = engine.recv().expect("event");

    assert_eq!(request_id, 9);
    assert_eq!(
        result,
        Err(AnalysisError::Internal("backend down".to_string()))
    );
}

#[test]
fn default_engine_runs_heuristic_analyzer() {
    let engine = EngineHandle::new(EngineConfig {
        settings: AnalysisSettings {
            simulated_latency: Duration::from_millis(5),
        },
        ..EngineConfig::default()
    })
    .expect("engine");

    assert!(engine.try_recv().is_none());
    engine.submit(text_request(1, "Breaking: shocking claim!"));
    let EngineEvent::AnalysisCompleted { result, .. } = engine.recv().expect("event");
    let result = result.expect("analysis ok");
    assert!((60..=99).contains(&result.confidence));
}

#[test]
fn panicking_service_reports_internal_failure() {
    let engine = EngineHandle::with_service(Arc::new(PanickingService), Arc::new(String::new))
        .expect("engine");

    engine.submit(text_request(5, "claim"));
    let EngineEvent::AnalysisCompleted {
        request_id, result, ..
    } = engine
        .recv_timeout(Duration::from_secs(5))
        .expect("completion event");

    assert_eq!(request_id, 5);
    assert_eq!(result, Err(AnalysisError::Internal("service bug".to_string())));

    // The engine keeps serving after a panic.
    engine.submit(text_request(6, "claim"));
    assert!(engine.recv_timeout(Duration::from_secs(5)).is_some());
}

#[test]
fn recv_timeout_returns_none_when_idle() {
    let engine = EngineHandle::with_service(
        Arc::new(RecordingService::default()),
        Arc::new(String::new),
    )
    .expect("engine");

    assert!(engine.recv_timeout(Duration::from_millis(20)).is_none());
}
