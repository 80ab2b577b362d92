pub use aggregator::{format_block, AggregationResult, Aggregator, EntryFailure};
pub use cli::Cli;
pub use error::{EntryError, Error, Result, SinkError};
pub use fs::{DirEntry, EntryKind, FileSystem, OsFileSystem, PathEntry, SymlinkPolicy};
pub use logging::init_logging;
pub use outcome::CopyOutcome;
pub use sink::{ClipboardSink, FileSink, Sink, StdoutSink};

mod aggregator;
mod cli;
mod error;
mod fs;
mod logging;
mod outcome;
mod sink;
#[cfg(test)]
mod test_utils;
