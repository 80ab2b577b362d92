use std::process::ExitCode;

use crate::aggregator::AggregationResult;

/// What the host reports once an aggregation has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// No entries were supplied at all.
    NothingSelected,
    /// Entries were supplied but produced no text.
    NothingCopied,
    Copied { file_count: usize },
}

impl CopyOutcome {
    pub fn classify(selected: usize, result: &AggregationResult) -> Self {
        if selected == 0 {
            CopyOutcome::NothingSelected
        } else if result.is_empty() {
            CopyOutcome::NothingCopied
        } else {
            CopyOutcome::Copied {
                file_count: result.file_count,
            }
        }
    }

    pub fn message(&self, destination: &str) -> String {
        match self {
            CopyOutcome::NothingSelected => "No items selected to copy.".to_string(),
            CopyOutcome::NothingCopied => "No file contents were copied.".to_string(),
            CopyOutcome::Copied { file_count } => {
                format!("Contents of {file_count} file(s) copied to {destination}!")
            }
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            CopyOutcome::Copied { .. } => ExitCode::SUCCESS,
            CopyOutcome::NothingCopied => ExitCode::from(1),
            CopyOutcome::NothingSelected => ExitCode::from(2),
        }
    }
}
