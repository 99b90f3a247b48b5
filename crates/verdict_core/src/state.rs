use crate::view_model::{FileView, UiViewModel};
use crate::{present, validate, AnalysisRequest, ContentPayload, FileHandle, InputMode, ValidationError};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub verdict: String,
    /// Percentage in `0..=100`; anything else is the service's contract violation.
    pub confidence: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisFailure {
    pub message: String,
}

impl AnalysisFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    request_id: RequestId,
    mode: InputMode,
    /// Set once the user switches modes after submitting.
    stale: bool,
}

/// Outcome of matching a completion against the in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Completion {
    Current,
    Stale,
    Unknown,
}

/// Session state. Each mode keeps its own slot so switching tabs never
/// discards what the user entered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    active_mode: InputMode,
    text: String,
    url: String,
    file: Option<FileHandle>,
    drag_over: bool,
    result: Option<AnalysisResult>,
    failure: Option<AnalysisFailure>,
    validation_error: Option<ValidationError>,
    in_flight: Option<InFlight>,
    next_request_id: RequestId,
    dirty: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_mode(&self) -> InputMode {
        self.active_mode
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn failure(&self) -> Option<&AnalysisFailure> {
        self.failure.as_ref()
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn file(&self) -> Option<&FileHandle> {
        self.file.as_ref()
    }

    /// Id of the request currently being analyzed, if any.
    pub fn in_flight_request(&self) -> Option<RequestId> {
        self.in_flight.as_ref().map(|in_flight| in_flight.request_id)
    }

    /// Mode the in-flight request was submitted from.
    pub fn in_flight_mode(&self) -> Option<InputMode> {
        self.in_flight.as_ref().map(|in_flight| in_flight.mode)
    }

    /// Payload of the active mode, cloned for submission.
    pub fn active_payload(&self) -> ContentPayload {
        match self.active_mode {
            InputMode::Text => ContentPayload::Text(self.text.clone()),
            InputMode::Url => ContentPayload::Url(self.url.clone()),
            InputMode::File => ContentPayload::File(self.file.clone()),
        }
    }

    pub fn view(&self) -> UiViewModel {
        let loading = self.is_loading();
        UiViewModel {
            active_mode: self.active_mode,
            text: self.text.clone(),
            url: self.url.clone(),
            file: self.file.as_ref().map(FileView::from_handle),
            drag_over: self.drag_over,
            loading,
            analyze_enabled: !loading,
            analyze_label: if loading {
                "Analyzing..."
            } else {
                "Analyze Content"
            },
            validation_message: self.validation_error.map(|err| err.user_message()),
            failure_message: self.failure.as_ref().map(|f| f.message.clone()),
            result: self.result.as_ref().map(present),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn select_mode(&mut self, mode: InputMode) {
        self.active_mode = mode;
        self.result = None;
        self.failure = None;
        self.validation_error = None;
        if mode != InputMode::File {
            self.drag_over = false;
        }
        if let Some(in_flight) = self.in_flight.as_mut() {
            in_flight.stale = true;
        }
        self.mark_dirty();
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
        self.validation_error = None;
        self.mark_dirty();
    }

    pub(crate) fn set_url(&mut self, url: String) {
        self.url = url;
        self.validation_error = None;
        self.mark_dirty();
    }

    pub(crate) fn set_file(&mut self, file: Option<FileHandle>) {
        self.file = file;
        self.validation_error = None;
        self.mark_dirty();
    }

    /// Returns false when the flag already had this value.
    pub(crate) fn set_drag_over(&mut self, drag_over: bool) -> bool {
        if self.drag_over == drag_over {
            return false;
        }
        self.drag_over = drag_over;
        self.mark_dirty();
        true
    }

    /// Clears the previous outcome and validates the active payload. On
    /// success the request is recorded as in flight and returned.
    pub(crate) fn begin_submission(&mut self) -> Result<AnalysisRequest, ValidationError> {
        self.result = None;
        self.failure = None;
        self.mark_dirty();

        let payload = self.active_payload();
        if let Err(err) = validate(self.active_mode, &payload) {
            self.validation_error = Some(err);
            return Err(err);
        }
        self.validation_error = None;

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(InFlight {
            request_id,
            mode: self.active_mode,
            stale: false,
        });
        Ok(AnalysisRequest {
            request_id,
            mode: self.active_mode,
            payload,
        })
    }

    /// Ends the in-flight request if `request_id` matches it.
    pub(crate) fn finish_submission(&mut self, request_id: RequestId) -> Completion {
        match &self.in_flight {
            Some(in_flight) if in_flight.request_id == request_id => {
                let stale = in_flight.stale;
                self.in_flight = None;
                self.mark_dirty();
                if stale {
                    Completion::Stale
                } else {
                    Completion::Current
                }
            }
            _ => Completion::Unknown,
        }
    }

    pub(crate) fn set_result(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.mark_dirty();
    }

    pub(crate) fn set_failure(&mut self, failure: AnalysisFailure) {
        self.failure = Some(failure);
        self.mark_dirty();
    }
}
