//! Line commands typed at the session prompt.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use verdict_core::{mime_type_for_name, FileHandle, InputMode, Msg};
use verdict_logging::verdict_warn;

pub const HELP: &str = "\
Commands:
  mode text|url|file   switch input tab
  text <content>       set the text buffer
  url <link>           set the URL buffer
  pick <path>          attach a file as if chosen in the picker
  drag | leave         drag enters / leaves the drop region
  drop <path>...       drop one or more files (only the first is kept)
  remove               remove the attached file
  analyze              submit the active input
  show                 print the current screen
  help                 show this help
  quit                 end the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Mode(InputMode),
    Text(String),
    Url(String),
    Pick(PathBuf),
    Drag,
    Leave,
    Drop(Vec<PathBuf>),
    Remove,
    Analyze,
    Show,
    Help,
    Quit,
}

/// Parses one prompt line. Buffers for `text` and `url` keep everything
/// after the first space verbatim.
pub fn parse_command(line: &str) -> anyhow::Result<Command> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    let command = match word {
        "mode" => Command::Mode(parse_mode(rest.trim())?),
        "text" => Command::Text(rest.to_string()),
        "url" => Command::Url(rest.to_string()),
        "pick" => {
            let path = rest.trim();
            if path.is_empty() {
                bail!("pick needs a file path");
            }
            Command::Pick(PathBuf::from(path))
        }
        "drag" => Command::Drag,
        "leave" => Command::Leave,
        "drop" => Command::Drop(rest.split_whitespace().map(PathBuf::from).collect()),
        "remove" => Command::Remove,
        "analyze" => Command::Analyze,
        "show" | "" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command `{other}`; type `help`"),
    };
    Ok(command)
}

fn parse_mode(raw: &str) -> anyhow::Result<InputMode> {
    match raw.to_ascii_lowercase().as_str() {
        "text" => Ok(InputMode::Text),
        "url" => Ok(InputMode::Url),
        "file" => Ok(InputMode::File),
        other => bail!("unknown mode `{other}`; expected text, url or file"),
    }
}

/// Builds a handle from file metadata on disk.
pub fn file_handle_from_path(path: &Path) -> anyhow::Result<FileHandle> {
    let meta = fs::metadata(path).with_context(|| format!("cannot read {}", path.display()))?;
    if !meta.is_file() {
        bail!("{} is not a file", path.display());
    }
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;
    let mime_type = mime_type_for_name(&name);
    Ok(FileHandle::new(name, meta.len(), mime_type))
}

/// Maps a command onto a core message. Commands that only affect the
/// session itself yield `None`.
pub fn to_msg(command: Command) -> anyhow::Result<Option<Msg>> {
    let msg = match command {
        Command::Mode(mode) => Msg::ModeSelected(mode),
        Command::Text(text) => Msg::TextChanged(text),
        Command::Url(url) => Msg::UrlChanged(url),
        Command::Pick(path) => Msg::FilePicked(file_handle_from_path(&path)?),
        Command::Drag => Msg::DragEntered,
        Command::Leave => Msg::DragLeft,
        Command::Drop(paths) => Msg::FilesDropped(first_dropped_handle(&paths)),
        Command::Remove => Msg::FileRemoved,
        Command::Analyze => Msg::AnalyzeClicked,
        Command::Show | Command::Help | Command::Quit => return Ok(None),
    };
    Ok(Some(msg))
}

/// Only the first dropped path is ever read. An unreadable first path still
/// produces a drop so the drop zone leaves its drag state.
fn first_dropped_handle(paths: &[PathBuf]) -> Vec<FileHandle> {
    let Some(first) = paths.first() else {
        return Vec::new();
    };
    match file_handle_from_path(first) {
        Ok(handle) => vec![handle],
        Err(err) => {
            verdict_warn!("Ignoring dropped file: {:#}", err);
            Vec::new()
        }
    }
}
