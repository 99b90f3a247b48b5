//! Pure projection of an [`AnalysisResult`] into what the result panel shows.
use crate::AnalysisResult;

/// Verdict substring that marks a result as risky.
pub const RISK_MARKER: &str = "Potential";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCategory {
    Ok,
    Warn,
}

impl DisplayCategory {
    pub fn css_class(self) -> &'static str {
        match self {
            DisplayCategory::Ok => "ok",
            DisplayCategory::Warn => "warn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub category: DisplayCategory,
    pub verdict: String,
    pub confidence: u8,
    pub notes: String,
}

impl ResultView {
    pub fn badge(&self) -> String {
        format!("{} • {}% confidence", self.verdict, self.confidence)
    }
}

pub fn classify(verdict: &str) -> DisplayCategory {
    if verdict.contains(RISK_MARKER) {
        DisplayCategory::Warn
    } else {
        DisplayCategory::Ok
    }
}

pub fn present(result: &AnalysisResult) -> ResultView {
    ResultView {
        category: classify(&result.verdict),
        verdict: result.verdict.clone(),
        confidence: result.confidence,
        notes: result.notes.clone(),
    }
}
