use std::sync::Once;

use verdict_core::{
    update, AnalysisResult, Effect, FileHandle, InputMode, Msg, RequestId, UiState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(verdict_logging::initialize_for_tests);
}

fn apply(state: UiState, msgs: Vec<Msg>) -> UiState {
    msgs.into_iter().fold(state, |state, msg| update(state, msg).0)
}

fn submit(state: UiState) -> (UiState, RequestId) {
    let (state, effects) = update(state, Msg::AnalyzeClicked);
    match effects.as_slice() {
        [Effect::Analyze(request)] => {
            let id = request.request_id;
            (state, id)
        }
        other => panic!("expected one analyze effect, got {other:?}"),
    }
}

fn real_result() -> AnalysisResult {
    AnalysisResult {
        verdict: "Likely Real".to_string(),
        confidence: 72,
        notes: "Heuristic analysis of claims and sensational language.".to_string(),
    }
}

#[test]
fn switching_mode_keeps_every_payload() {
    init_logging();
    let state = apply(
        UiState::new(),
        vec![
            Msg::TextChanged("  some claim ".to_string()),
            Msg::ModeSelected(InputMode::Url),
            Msg::UrlChanged("example.com/story".to_string()),
            Msg::ModeSelected(InputMode::File),
            Msg::FilePicked(FileHandle::new("photo.png", 2048, "image/png")),
            Msg::ModeSelected(InputMode::Text),
        ],
    );

    assert_eq!(state.active_mode(), InputMode::Text);
    assert_eq!(state.text(), "  some claim ");
    assert_eq!(state.url(), "example.com/story");
    assert_eq!(state.file().map(|f| f.name.as_str()), Some("photo.png"));
}

#[test]
fn result_is_cleared_on_any_mode_switch() {
    init_logging();
    for target in InputMode::ALL {
        let state = apply(UiState::new(), vec![Msg::TextChanged("claim".to_string())]);
        let (state, request_id) = submit(state);
        let state = apply(
            state,
            vec![Msg::AnalysisDone {
                request_id,
                result: real_result(),
            }],
        );
        assert!(state.result().is_some());

        let (state, effects) = update(state, Msg::ModeSelected(target));
        assert!(effects.is_empty());
        assert!(state.result().is_none(), "result survived switch to {target:?}");
        assert!(state.view().result.is_none());
    }
}

#[test]
fn switching_back_does_not_restore_result() {
    init_logging();
    let state = apply(
        UiState::new(),
        vec![Msg::TextChanged("Breaking: shocking claim!".to_string())],
    );
    let (state, request_id) = submit(state);
    let state = apply(
        state,
        vec![
            Msg::AnalysisDone {
                request_id,
                result: real_result(),
            },
            Msg::ModeSelected(InputMode::Url),
            Msg::ModeSelected(InputMode::Text),
        ],
    );

    assert!(state.result().is_none());
    assert_eq!(state.text(), "Breaking: shocking claim!");
}

#[test]
fn drag_state_only_tracks_in_file_mode() {
    init_logging();
    let (state, _) = update(UiState::new(), Msg::DragEntered);
    assert!(!state.is_drag_over());

    let state = apply(state, vec![Msg::ModeSelected(InputMode::File), Msg::DragEntered]);
    assert!(state.is_drag_over());
    assert!(state.view().drag_over);

    let (state, _) = update(state, Msg::DragLeft);
    assert!(!state.is_drag_over());
}

#[test]
fn leaving_file_mode_resets_drag_over() {
    init_logging();
    let state = apply(
        UiState::new(),
        vec![
            Msg::ModeSelected(InputMode::File),
            Msg::DragEntered,
            Msg::ModeSelected(InputMode::Text),
        ],
    );
    assert!(!state.is_drag_over());
}

#[test]
fn drop_keeps_first_file_and_remove_clears_it() {
    init_logging();
    let state = apply(
        UiState::new(),
        vec![
            Msg::ModeSelected(InputMode::File),
            Msg::DragEntered,
            Msg::FilesDropped(vec![
                FileHandle::new("first.pdf", 1000, "application/pdf"),
                FileHandle::new("second.png", 2000, "image/png"),
            ]),
        ],
    );

    assert!(!state.is_drag_over());
    let view = state.view();
    let row = view.file.expect("file row");
    assert_eq!(row.name, "first.pdf");
    assert_eq!(row.size, 1000);

    let (state, _) = update(state, Msg::FileRemoved);
    assert!(state.file().is_none());
    assert!(state.view().file.is_none());
    assert_eq!(state.active_mode(), InputMode::File);
    assert!(!state.is_drag_over());
}

#[test]
fn empty_drop_keeps_existing_capture() {
    init_logging();
    let state = apply(
        UiState::new(),
        vec![
            Msg::ModeSelected(InputMode::File),
            Msg::FilePicked(FileHandle::new("kept.txt", 10, "text/plain")),
            Msg::DragEntered,
            Msg::FilesDropped(Vec::new()),
        ],
    );

    assert!(!state.is_drag_over());
    assert_eq!(state.file().map(|f| f.name.as_str()), Some("kept.txt"));
}

#[test]
fn drop_outside_file_mode_is_ignored() {
    init_logging();
    let (state, _) = update(
        UiState::new(),
        Msg::FilesDropped(vec![FileHandle::new("a.png", 1, "image/png")]),
    );
    assert!(state.file().is_none());
}

#[test]
fn remove_while_dragging_keeps_drag_flag() {
    init_logging();
    let state = apply(
        UiState::new(),
        vec![
            Msg::ModeSelected(InputMode::File),
            Msg::FilePicked(FileHandle::new("a.png", 1, "image/png")),
            Msg::DragEntered,
            Msg::FileRemoved,
        ],
    );
    assert!(state.file().is_none());
    assert!(state.is_drag_over());
}

#[test]
fn file_view_carries_advisory_hints_without_rejecting() {
    init_logging();
    let state = apply(
        UiState::new(),
        vec![
            Msg::ModeSelected(InputMode::File),
            Msg::FilePicked(FileHandle::new(
                "huge.zip",
                11 * 1024 * 1024,
                "application/zip",
            )),
        ],
    );
    let row = state.view().file.expect("file row");
    assert!(!row.accepted_type);
    assert!(row.over_size_hint);

    let (_, effects) = update(state, Msg::AnalyzeClicked);
    assert_eq!(effects.len(), 1);
}

#[test]
fn dirty_flag_is_consumed_once() {
    init_logging();
    let (mut state, _) = update(UiState::new(), Msg::TextChanged("x".to_string()));
    assert!(state.view().dirty);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());

    // Re-entering the same drag state changes nothing.
    let (mut state, _) = update(state, Msg::DragLeft);
    assert!(!state.consume_dirty());
}
