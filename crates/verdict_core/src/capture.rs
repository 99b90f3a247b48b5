//! Content capture types and the advisory file affordances.
//!
//! Nothing here rejects a capture: accepted extensions and the size limit are
//! hints for the presentation layer.

/// Extensions offered by the file picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "pdf", "txt", "md"];

/// Advisory upper bound for attached files (10 MB).
pub const ADVISORY_MAX_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    #[default]
    Text,
    Url,
    File,
}

impl InputMode {
    pub const ALL: [InputMode; 3] = [InputMode::Text, InputMode::Url, InputMode::File];

    pub fn label(self) -> &'static str {
        match self {
            InputMode::Text => "Text",
            InputMode::Url => "URL",
            InputMode::File => "File",
        }
    }
}

/// A single attached file. Only metadata is captured; reading the bytes is
/// left to whoever performs the analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    pub fn extension(&self) -> Option<&str> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            None
        } else {
            Some(ext)
        }
    }

    pub fn has_accepted_extension(&self) -> bool {
        self.extension().is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
    }

    pub fn exceeds_advisory_size(&self) -> bool {
        self.size > ADVISORY_MAX_BYTES
    }
}

/// Best-effort MIME type from a file name, for building a [`FileHandle`]
/// from a path.
pub fn mime_type_for_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "md" => "text/markdown",
        _ => "application/octet-stream",
    }
}

/// Content captured for one input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPayload {
    Text(String),
    Url(String),
    File(Option<FileHandle>),
}

impl ContentPayload {
    pub fn mode(&self) -> InputMode {
        match self {
            ContentPayload::Text(_) => InputMode::Text,
            ContentPayload::Url(_) => InputMode::Url,
            ContentPayload::File(_) => InputMode::File,
        }
    }
}

/// Keeps the first file of a drop and discards the rest.
pub fn first_dropped(files: Vec<FileHandle>) -> Option<FileHandle> {
    files.into_iter().next()
}
