//! Verdict engine: analysis service contract and effect execution.
mod analyzer;
mod engine;
mod types;

pub use analyzer::{
    AnalysisService, AnalysisSettings, HeuristicAnalyzer, FILE_NOTES, TEXT_NOTES, URL_NOTES,
    VERDICT_LIKELY_REAL, VERDICT_POTENTIAL_MISINFORMATION,
};
pub use engine::{Clock, EngineConfig, EngineHandle};
pub use types::{AnalysisError, EngineEvent};
