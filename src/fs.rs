//! The filesystem seen by the aggregator.
//!
//! [`FileSystem`] carries the three capabilities a walk needs: `stat`,
//! directory listing and whole-file reads. [`OsFileSystem`] is the real
//! implementation; tests substitute an in-memory one to control listing
//! order and inject failures.

use std::ffi::OsString;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::EntryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl From<std::fs::FileType> for EntryKind {
    fn from(file_type: std::fs::FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}

/// A path whose kind has already been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl PathEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        PathEntry {
            path: path.into(),
            kind,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        PathEntry::new(path, EntryKind::File)
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        PathEntry::new(path, EntryKind::Directory)
    }
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

/// How symlinks found inside a walked directory are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymlinkPolicy {
    /// Report them as [`EntryKind::Symlink`], which the aggregator skips.
    #[default]
    Skip,
    /// Report the kind of the link target. Cycles are not detected.
    Follow,
}

pub trait FileSystem: Debug {
    /// Resolves the kind of `path`, following symlinks.
    fn stat(&self, path: &Path) -> Result<EntryKind, EntryError>;

    /// Lists the immediate children of `path` in the order the backing
    /// store yields them.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, EntryError>;

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, EntryError>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn stat(&self, path: &Path) -> Result<EntryKind, EntryError> {
        (**self).stat(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, EntryError> {
        (**self).read_dir(path)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, EntryError> {
        (**self).read_file(path)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem {
    pub symlinks: SymlinkPolicy,
}

impl OsFileSystem {
    pub fn new(symlinks: SymlinkPolicy) -> Self {
        OsFileSystem { symlinks }
    }
}

impl FileSystem for OsFileSystem {
    fn stat(&self, path: &Path) -> Result<EntryKind, EntryError> {
        Ok(std::fs::metadata(path)?.file_type().into())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, EntryError> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let mut kind = EntryKind::from(entry.file_type()?);
            if kind == EntryKind::Symlink && self.symlinks == SymlinkPolicy::Follow {
                // A dangling link keeps its Symlink kind and is skipped.
                match std::fs::metadata(entry.path()) {
                    Ok(target) => kind = target.file_type().into(),
                    Err(error) => trace!(path = ?entry.path(), %error, "Dangling symlink"),
                }
            }
            entries.push(DirEntry {
                name: entry.file_name(),
                kind,
            });
        }
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, EntryError> {
        Ok(std::fs::read(path)?)
    }
}
