use verdict_logging::{verdict_debug, verdict_info};

use crate::capture::first_dropped;
use crate::state::Completion;
use crate::{Effect, InputMode, Msg, UiState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: UiState, msg: Msg) -> (UiState, Vec<Effect>) {
    let effects = match msg {
        Msg::ModeSelected(mode) => {
            if state.is_loading() {
                verdict_debug!(
                    "Mode switched to {:?} while request {:?} in flight; its result will be dropped",
                    mode,
                    state.in_flight_request()
                );
            }
            state.select_mode(mode);
            Vec::new()
        }
        Msg::TextChanged(text) => {
            state.set_text(text);
            Vec::new()
        }
        Msg::UrlChanged(url) => {
            state.set_url(url);
            Vec::new()
        }
        Msg::FilePicked(file) => {
            state.set_file(Some(file));
            Vec::new()
        }
        Msg::DragEntered => {
            if state.active_mode() == InputMode::File {
                state.set_drag_over(true);
            }
            Vec::new()
        }
        Msg::DragLeft => {
            if state.active_mode() == InputMode::File {
                state.set_drag_over(false);
            }
            Vec::new()
        }
        Msg::FilesDropped(files) => {
            // The drop region only exists in file mode.
            if state.active_mode() != InputMode::File {
                return (state, Vec::new());
            }
            state.set_drag_over(false);
            let dropped = files.len();
            if let Some(file) = first_dropped(files) {
                if dropped > 1 {
                    verdict_debug!("Dropped {} files; keeping only {}", dropped, file.name);
                }
                state.set_file(Some(file));
            }
            Vec::new()
        }
        Msg::FileRemoved => {
            state.set_file(None);
            Vec::new()
        }
        Msg::AnalyzeClicked => {
            // Single-flight: a second submit never starts while one is pending.
            if state.is_loading() {
                verdict_debug!(
                    "Analyze ignored; request {:?} still in flight",
                    state.in_flight_request()
                );
                return (state, Vec::new());
            }
            match state.begin_submission() {
                Ok(request) => {
                    verdict_info!(
                        "Submitting request {} for {:?}",
                        request.request_id,
                        request.mode
                    );
                    vec![Effect::Analyze(request)]
                }
                Err(_) => Vec::new(),
            }
        }
        Msg::AnalysisDone { request_id, result } => {
            let mode = state.in_flight_mode();
            match state.finish_submission(request_id) {
                Completion::Current => {
                    verdict_info!(
                        "Request {} for {:?} resolved: {} ({}%)",
                        request_id,
                        mode,
                        result.verdict,
                        result.confidence
                    );
                    state.set_result(result);
                }
                Completion::Stale => {
                    verdict_info!("Dropping stale result for request {}", request_id);
                }
                Completion::Unknown => {
                    verdict_debug!("Ignoring result for unknown request {}", request_id);
                }
            }
            Vec::new()
        }
        Msg::AnalysisFailed {
            request_id,
            failure,
        } => {
            match state.finish_submission(request_id) {
                Completion::Current => state.set_failure(failure),
                Completion::Stale => {
                    verdict_info!("Dropping stale failure for request {}", request_id);
                }
                Completion::Unknown => {
                    verdict_debug!("Ignoring failure for unknown request {}", request_id);
                }
            }
            Vec::new()
        }
    };

    (state, effects)
}
