use crate::{FileHandle, InputMode, ResultView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiViewModel {
    pub active_mode: InputMode,
    pub text: String,
    pub url: String,
    pub file: Option<FileView>,
    pub drag_over: bool,
    pub loading: bool,
    pub analyze_enabled: bool,
    pub analyze_label: &'static str,
    pub validation_message: Option<&'static str>,
    pub failure_message: Option<String>,
    pub result: Option<ResultView>,
    pub dirty: bool,
}

/// The captured file row, with the advisory hints already evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileView {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub accepted_type: bool,
    pub over_size_hint: bool,
}

impl FileView {
    pub(crate) fn from_handle(handle: &FileHandle) -> Self {
        Self {
            name: handle.name.clone(),
            size: handle.size,
            mime_type: handle.mime_type.clone(),
            accepted_type: handle.has_accepted_extension(),
            over_size_hint: handle.exceeds_advisory_size(),
        }
    }
}
