//! Destinations for aggregated text.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::SinkError;

pub trait Sink {
    /// Human-readable destination, used in the summary line.
    fn describe(&self) -> String;

    fn write(&mut self, text: &str) -> Result<(), SinkError>;
}

#[derive(Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn describe(&self) -> String {
        "stdout".to_string()
    }

    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }
}

impl Sink for FileSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        std::fs::write(&self.path, text).map_err(|source| SinkError::File {
            path: self.path.clone(),
            source,
        })?;
        info!(path = ?self.path, bytes = text.len(), "Wrote output file");
        Ok(())
    }
}

/// Pipes text into the first clipboard command that can be spawned.
#[derive(Debug)]
pub struct ClipboardSink {
    commands: Vec<Vec<String>>,
}

impl ClipboardSink {
    /// Tries the usual clipboard tools for the current platform.
    pub fn new() -> Self {
        let commands: &[&[&str]] = if cfg!(target_os = "macos") {
            &[&["pbcopy"]]
        } else if cfg!(windows) {
            &[&["clip"]]
        } else {
            &[
                &["wl-copy"],
                &["xclip", "-selection", "clipboard"],
                &["xsel", "--clipboard", "--input"],
            ]
        };
        ClipboardSink {
            commands: commands
                .iter()
                .map(|command| command.iter().map(|arg| arg.to_string()).collect())
                .collect(),
        }
    }

    /// Uses exactly `command`, split on whitespace.
    pub fn with_command(command: &str) -> Self {
        ClipboardSink {
            commands: vec![command.split_whitespace().map(str::to_string).collect()],
        }
    }

    fn tried(&self) -> String {
        self.commands
            .iter()
            .filter_map(|command| command.first().cloned())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ClipboardSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ClipboardSink {
    fn describe(&self) -> String {
        "clipboard".to_string()
    }

    fn write(&mut self, text: &str) -> Result<(), SinkError> {
        for command in &self.commands {
            let Some((program, args)) = command.split_first() else {
                continue;
            };

            let spawned = Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            let mut child = match spawned {
                Ok(child) => child,
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                    debug!(%program, "Clipboard command not found");
                    continue;
                }
                Err(error) => return Err(error.into()),
            };

            if let Some(mut stdin) = child.stdin.take() {
                // An early exit closes the pipe; the exit status says why.
                if let Err(error) = stdin.write_all(text.as_bytes()) {
                    if error.kind() != std::io::ErrorKind::BrokenPipe {
                        return Err(error.into());
                    }
                }
            }
            let status = child.wait()?;
            if !status.success() {
                return Err(SinkError::ClipboardFailed {
                    command: command.join(" "),
                    status,
                });
            }

            info!(%program, bytes = text.len(), "Copied to clipboard");
            return Ok(());
        }

        Err(SinkError::NoClipboardTool {
            tried: self.tried(),
        })
    }
}
