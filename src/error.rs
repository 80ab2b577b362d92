use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("aggregation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Failure attached to a single entry of an aggregation.
///
/// None of these abort the walk; they are collected next to the text.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("no such file or directory")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("contents are not valid UTF-8")]
    Decode(#[from] std::string::FromUtf8Error),
    #[error("io error: {0}")]
    Io(io::Error),
}

impl From<io::Error> for EntryError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => EntryError::NotFound,
            io::ErrorKind::PermissionDenied => EntryError::PermissionDenied,
            _ => EntryError::Io(error),
        }
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("no clipboard command found (tried {tried})")]
    NoClipboardTool { tried: String },
    #[error("clipboard command `{command}` exited with {status}")]
    ClipboardFailed {
        command: String,
        status: std::process::ExitStatus,
    },
    #[error("failed to write {path}: {source}")]
    File { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
