use std::path::{Path, PathBuf};

use tracing::error;

pub use walk::Aggregator;

use crate::error::EntryError;

mod task;
mod walk;

/// Text gathered from one aggregation call.
#[derive(Debug, Default)]
pub struct AggregationResult {
    /// Concatenated [`format_block`] output, in depth-first pre-order.
    pub text: String,
    /// Number of files whose contents made it into `text`.
    pub file_count: usize,
    /// Every entry that could not be read, in the order encountered.
    pub failures: Vec<EntryFailure>,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn push_file(&mut self, path: &Path, contents: &str) {
        self.text.push_str(&format_block(path, contents));
        self.file_count += 1;
    }

    fn push_failure(&mut self, path: &Path, error: EntryError) {
        error!(?path, %error, "Error processing entry");
        self.failures.push(EntryFailure {
            path: path.to_path_buf(),
            error,
        });
    }
}

#[derive(Debug)]
pub struct EntryFailure {
    pub path: PathBuf,
    pub error: EntryError,
}

impl std::fmt::Display for EntryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error processing {}: {}", self.path.display(), self.error)
    }
}

/// Renders one file as `File: <path>\n\n<contents>\n\n`.
///
/// Blocks are concatenated as-is; there is no separator between them.
pub fn format_block(path: &Path, contents: &str) -> String {
    format!("File: {}\n\n{}\n\n", path.display(), contents)
}
