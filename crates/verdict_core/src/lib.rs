//! Verdict core: pure submission state machine and view-model helpers.
mod capture;
mod effect;
mod msg;
mod present;
mod state;
mod update;
mod validate;
mod view_model;

pub use capture::{
    first_dropped, mime_type_for_name, ContentPayload, FileHandle, InputMode,
    ACCEPTED_EXTENSIONS, ADVISORY_MAX_BYTES,
};
pub use effect::{AnalysisRequest, Effect};
pub use msg::Msg;
pub use present::{classify, present, DisplayCategory, ResultView, RISK_MARKER};
pub use state::{AnalysisFailure, AnalysisResult, RequestId, UiState};
pub use update::update;
pub use validate::{validate, ValidationError};
pub use view_model::{FileView, UiViewModel};
