use crate::{ContentPayload, InputMode, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the request to the analysis service; its outcome comes back as
    /// `Msg::AnalysisDone` or `Msg::AnalysisFailed` with the same id.
    Analyze(AnalysisRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub request_id: RequestId,
    pub mode: InputMode,
    pub payload: ContentPayload,
}
