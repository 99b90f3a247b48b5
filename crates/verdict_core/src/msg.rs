use crate::{AnalysisFailure, AnalysisResult, FileHandle, InputMode, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked one of the input tabs.
    ModeSelected(InputMode),
    /// User edited the text buffer.
    TextChanged(String),
    /// User edited the URL buffer.
    UrlChanged(String),
    /// User chose a file through the picker.
    FilePicked(FileHandle),
    /// A drag entered or hovers the drop region.
    DragEntered,
    /// A drag left the drop region.
    DragLeft,
    /// Files were dropped on the drop region, in drop order.
    FilesDropped(Vec<FileHandle>),
    /// User clicked Remove on the captured file.
    FileRemoved,
    /// User clicked Analyze.
    AnalyzeClicked,
    /// Analysis service resolved a request.
    AnalysisDone {
        request_id: RequestId,
        result: AnalysisResult,
    },
    /// Analysis service could not produce a result.
    AnalysisFailed {
        request_id: RequestId,
        failure: AnalysisFailure,
    },
}
