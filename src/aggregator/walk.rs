use std::fmt::Debug;
use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::aggregator::AggregationResult;
use crate::error::EntryError;
use crate::fs::{EntryKind, FileSystem, PathEntry};

/// Sequential, depth-first aggregation over a [`FileSystem`].
#[derive(Debug, Clone)]
pub struct Aggregator<F> {
    fs: F,
}

impl<F: FileSystem> Aggregator<F> {
    pub fn new(fs: F) -> Self {
        Aggregator { fs }
    }

    /// Resolves each path with `stat` and aggregates it.
    ///
    /// A path that cannot be resolved is recorded as a failure and the
    /// remaining paths are still processed.
    #[instrument(level = "debug", skip_all, fields(entries = paths.len()))]
    pub fn aggregate_paths<P>(&self, paths: &[P]) -> AggregationResult
    where
        P: AsRef<Path> + Debug,
    {
        let mut result = AggregationResult::default();
        for path in paths {
            let path = path.as_ref();
            match self.fs.stat(path) {
                Ok(kind) => self.visit(path, kind, &mut result),
                Err(error) => result.push_failure(path, error),
            }
        }
        debug!(file_count = result.file_count, failures = result.failures.len(), "Done");
        result
    }

    /// Aggregates entries whose kinds are already known.
    #[instrument(level = "debug", skip_all, fields(entries = entries.len()))]
    pub fn aggregate(&self, entries: &[PathEntry]) -> AggregationResult {
        let mut result = AggregationResult::default();
        for entry in entries {
            self.visit(&entry.path, entry.kind, &mut result);
        }
        debug!(file_count = result.file_count, failures = result.failures.len(), "Done");
        result
    }

    fn visit(&self, path: &Path, kind: EntryKind, result: &mut AggregationResult) {
        match kind {
            EntryKind::Directory => self.walk_dir(path, result),
            EntryKind::File => match self.read_text(path) {
                Ok(contents) => {
                    trace!(?path, len = contents.len(), "Appended file");
                    result.push_file(path, &contents);
                }
                Err(error) => result.push_failure(path, error),
            },
            EntryKind::Symlink | EntryKind::Other => {
                debug!(?path, ?kind, "Skipping entry");
            }
        }
    }

    // No depth limit; a followed symlink cycle recurses until the stack runs out.
    fn walk_dir(&self, dir: &Path, result: &mut AggregationResult) {
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(error) => return result.push_failure(dir, error),
        };
        trace!(?dir, children = entries.len(), "Walking directory");

        for entry in entries {
            self.visit(&dir.join(&entry.name), entry.kind, result);
        }
    }

    fn read_text(&self, path: &Path) -> Result<String, EntryError> {
        let bytes = self.fs.read_file(path)?;
        Ok(String::from_utf8(bytes)?)
    }
}
