use std::time::Duration;

use sha2::{Digest, Sha256};
use verdict_core::{validate, AnalysisRequest, AnalysisResult, ContentPayload, InputMode, ValidationError};

use crate::AnalysisError;

pub const VERDICT_LIKELY_REAL: &str = "Likely Real";
pub const VERDICT_POTENTIAL_MISINFORMATION: &str = "Potential Misinformation";

pub const TEXT_NOTES: &str = "Heuristic analysis of claims and sensational language.";
pub const URL_NOTES: &str = "Checked headline structure and domain reputation.";
pub const FILE_NOTES: &str = "Read EXIF and ran image forensics heuristics.";

const MIN_CONFIDENCE: u8 = 60;
const CONFIDENCE_SPAN: u8 = 40;

#[async_trait::async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}

#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub simulated_latency: Duration,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_millis(900),
        }
    }
}

/// Stand-in analysis service. Verdict and confidence come from a digest of
/// the request payload, so identical content always scores the same.
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnalyzer {
    settings: AnalysisSettings,
}

impl HeuristicAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    fn score(request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        validate(request.mode, &request.payload).map_err(|err| match err {
            ValidationError::ModeMismatch { expected, .. } => {
                AnalysisError::MismatchedPayload { mode: expected }
            }
            _ => AnalysisError::EmptyPayload,
        })?;

        let digest = payload_digest(&request.payload);
        let verdict = if digest[0] & 1 == 0 {
            VERDICT_LIKELY_REAL
        } else {
            VERDICT_POTENTIAL_MISINFORMATION
        };
        let confidence = MIN_CONFIDENCE + digest[1] % CONFIDENCE_SPAN;

        Ok(AnalysisResult {
            verdict: verdict.to_string(),
            confidence,
            notes: notes_for(request.mode).to_string(),
        })
    }
}

#[async_trait::async_trait]
impl AnalysisService for HeuristicAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        if !self.settings.simulated_latency.is_zero() {
            tokio::time::sleep(self.settings.simulated_latency).await;
        }
        Self::score(request)
    }
}

pub(crate) fn notes_for(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Text => TEXT_NOTES,
        InputMode::Url => URL_NOTES,
        InputMode::File => FILE_NOTES,
    }
}

fn payload_digest(payload: &ContentPayload) -> [u8; 32] {
    let mut hasher = Sha256::new();
    match payload {
        ContentPayload::Text(text) => {
            hasher.update(b"text\0");
            hasher.update(text.trim().as_bytes());
        }
        ContentPayload::Url(url) => {
            hasher.update(b"url\0");
            hasher.update(url.trim().as_bytes());
        }
        ContentPayload::File(file) => {
            hasher.update(b"file\0");
            if let Some(file) = file {
                hasher.update(file.name.as_bytes());
                hasher.update(file.size.to_le_bytes());
                hasher.update(file.mime_type.as_bytes());
            }
        }
    }
    hasher.finalize().into()
}
