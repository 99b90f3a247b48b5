use thiserror::Error;

use crate::{ContentPayload, InputMode};

/// Reason a submission was refused before reaching the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty text")]
    EmptyText,
    #[error("empty url")]
    EmptyUrl,
    #[error("missing file")]
    MissingFile,
    /// The payload handed in does not belong to the requested mode.
    #[error("payload for {actual:?} submitted as {expected:?}")]
    ModeMismatch {
        expected: InputMode,
        actual: InputMode,
    },
}

impl ValidationError {
    /// Message shown to the user, naming the missing input.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyText => "Enter text to analyze",
            ValidationError::EmptyUrl => "Paste a URL to analyze",
            ValidationError::MissingFile => "Attach a file to analyze",
            ValidationError::ModeMismatch { .. } => "Select the matching input to analyze",
        }
    }
}

/// Checks the payload of the active mode. Whitespace-only buffers count as
/// empty; the stored buffer itself is never trimmed.
pub fn validate(mode: InputMode, payload: &ContentPayload) -> Result<(), ValidationError> {
    match (mode, payload) {
        (InputMode::Text, ContentPayload::Text(text)) if text.trim().is_empty() => {
            Err(ValidationError::EmptyText)
        }
        (InputMode::Url, ContentPayload::Url(url)) if url.trim().is_empty() => {
            Err(ValidationError::EmptyUrl)
        }
        (InputMode::File, ContentPayload::File(None)) => Err(ValidationError::MissingFile),
        (expected, payload) if payload.mode() != expected => Err(ValidationError::ModeMismatch {
            expected,
            actual: payload.mode(),
        }),
        _ => Ok(()),
    }
}
