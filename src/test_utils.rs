use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::aggregator::AggregationResult;
use crate::error::EntryError;
use crate::fs::{DirEntry, EntryKind, FileSystem};

/// Routes tracing output to the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Dir(Vec<OsString>),
    Symlink,
}

/// An in-memory tree whose directories list children in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    nodes: HashMap<PathBuf, Node>,
    denied: HashSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), Node::Dir(Vec::new()))
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path.into(), Node::File(contents.into()))
    }

    pub fn with_symlink(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), Node::Symlink)
    }

    /// Makes every operation on `path` fail with permission denied.
    pub fn deny(mut self, path: impl Into<PathBuf>) -> Self {
        self.denied.insert(path.into());
        self
    }

    fn insert(mut self, path: PathBuf, node: Node) -> Self {
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            if let Some(Node::Dir(children)) = self.nodes.get_mut(parent) {
                children.push(name.to_os_string());
            }
        }
        self.nodes.insert(path, node);
        self
    }

    fn node(&self, path: &Path) -> Result<&Node, EntryError> {
        if self.denied.contains(path) {
            return Err(EntryError::PermissionDenied);
        }
        self.nodes.get(path).ok_or(EntryError::NotFound)
    }

    fn kind_of(node: &Node) -> EntryKind {
        match node {
            Node::File(_) => EntryKind::File,
            Node::Dir(_) => EntryKind::Directory,
            Node::Symlink => EntryKind::Symlink,
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn stat(&self, path: &Path) -> Result<EntryKind, EntryError> {
        self.node(path).map(Self::kind_of)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>, EntryError> {
        match self.node(path)? {
            Node::Dir(children) => Ok(children
                .iter()
                .map(|name| DirEntry {
                    name: name.clone(),
                    kind: self
                        .nodes
                        .get(&path.join(name))
                        .map_or(EntryKind::Other, Self::kind_of),
                })
                .collect()),
            _ => Err(EntryError::Io(io::Error::new(
                io::ErrorKind::Other,
                "not a directory",
            ))),
        }
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, EntryError> {
        match self.node(path)? {
            Node::File(contents) => Ok(contents.clone()),
            _ => Err(EntryError::Io(io::Error::new(
                io::ErrorKind::Other,
                "not a file",
            ))),
        }
    }
}

/// Checks an aggregation of this crate's own `src/` directory.
pub struct AggregatorTester {
    src: PathBuf,
}

impl AggregatorTester {
    pub fn new() -> Self {
        let root_path = Path::new(".");
        let cargo_toml = root_path.join("Cargo.toml");
        if !cargo_toml.is_file() {
            panic!("Cargo.toml not found in current directory");
        }

        AggregatorTester {
            src: std::path::absolute("src").expect("current directory is readable"),
        }
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        vec![self.src.clone()]
    }

    pub fn test_for_current_crate(&self, result: &AggregationResult) {
        assert!(
            !result.text.is_empty(),
            "Expected content to have a length greater than 0"
        );
        assert!(result.failures.is_empty(), "{:?}", result.failures);
        assert!(result.file_count >= 10, "file_count = {}", result.file_count);

        let lib_header = format!("File: {}\n\n", self.src.join("lib.rs").display());
        assert!(result.text.contains(&lib_header));
        assert!(result.text.contains("mod aggregator"));
        assert!(result.text.contains("fn main()"));
    }
}
