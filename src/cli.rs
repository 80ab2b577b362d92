use std::io::BufRead;
use std::path::PathBuf;

use clap::Parser;

use crate::fs::SymlinkPolicy;
use crate::sink::{ClipboardSink, FileSink, Sink, StdoutSink};

#[derive(Parser, Debug)]
#[command(version, about)]
/// Concatenates the contents of files and directories into one annotated text.
///
/// Every file becomes a block of the form `File: <path>`, a blank line, its
/// contents and another blank line. Directories are walked depth-first in the
/// order the filesystem lists them.
pub struct Cli {
    /// Files and directories to aggregate, in output order.
    pub paths: Vec<PathBuf>,

    /// Also read newline-separated paths from stdin.
    #[arg(long)]
    pub stdin: bool,

    /// Write the result to this file instead of stdout.
    #[arg(short, long, conflicts_with = "clipboard")]
    pub output: Option<PathBuf>,

    /// Copy the result to the system clipboard instead of stdout.
    #[arg(short, long)]
    pub clipboard: bool,

    /// Clipboard command to pipe into, e.g. "xclip -selection clipboard".
    #[arg(long, requires = "clipboard")]
    pub clipboard_command: Option<String>,

    /// Follow symlinks found inside directories. Cycles are not detected.
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the summary line.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn symlink_policy(&self) -> SymlinkPolicy {
        if self.follow_symlinks {
            SymlinkPolicy::Follow
        } else {
            SymlinkPolicy::Skip
        }
    }

    pub fn sink(&self) -> Box<dyn Sink> {
        if let Some(output) = &self.output {
            Box::new(FileSink::new(output))
        } else if self.clipboard {
            match &self.clipboard_command {
                Some(command) => Box::new(ClipboardSink::with_command(command)),
                None => Box::new(ClipboardSink::new()),
            }
        } else {
            Box::new(StdoutSink)
        }
    }

    /// Positional paths followed by any read from `reader` when `--stdin`
    /// is set. Blank lines are ignored.
    pub fn selected_paths<R: BufRead>(&self, reader: R) -> std::io::Result<Vec<PathBuf>> {
        let mut paths = self.paths.clone();
        if self.stdin {
            for line in reader.lines() {
                let line = line?;
                let line = line.trim();
                if !line.is_empty() {
                    paths.push(PathBuf::from(line));
                }
            }
        }
        Ok(paths)
    }
}
