use thiserror::Error;
use verdict_core::{AnalysisResult, InputMode, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisResult, AnalysisError>,
        completed_utc: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("nothing to analyze")]
    EmptyPayload,
    #[error("payload does not match {mode:?} request")]
    MismatchedPayload { mode: InputMode },
    #[error("analysis failed: {0}")]
    Internal(String),
}
