//! Process execution utilities
//!
//! Runs external tools inside an explicit working directory, either streaming
//! their output to the terminal or capturing it for the caller.

use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// How a child process' stdout/stderr are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// Pass output straight through to the user's terminal
    #[default]
    Inherit,
    /// Capture output into the [`ProcessResult`]
    Capture,
}

/// Utility for running external processes
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    debug: bool,
    output: OutputMode,
}

/// Result of a process execution
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// Command line as it was run
    pub command: String,
    /// Exit status code, `None` when killed by a signal
    pub exit_code: Option<i32>,
    /// Standard output (empty when inherited)
    pub stdout: String,
    /// Standard error (empty when inherited)
    pub stderr: String,
    /// Whether the process was successful
    pub success: bool,
}

impl ProcessResult {
    /// Turn a non-successful run into a [`ScaffoldError::Process`]
    pub fn ensure_success(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ScaffoldError::process(
                self.command,
                self.exit_code,
                self.stderr,
            ))
        }
    }
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool, output: OutputMode) -> Self {
        Self { debug, output }
    }

    /// Run `command` with `args` inside `cwd` and wait for it to exit.
    ///
    /// A non-zero exit is not an error here; it is reported through
    /// [`ProcessResult::success`]. Only a failure to start the process is.
    #[instrument(skip(self))]
    pub fn run(&self, command: &str, args: &[&str], cwd: &Path) -> Result<ProcessResult> {
        let cmd_str = command_line(command, args);

        if self.debug {
            debug!("Running command in {}: {}", cwd.display(), cmd_str);
        } else {
            info!("+ {}", cmd_str);
        }

        let mut cmd = Command::new(command);
        cmd.args(args).current_dir(cwd).stdin(Stdio::null());

        let (exit_code, success, stdout, stderr) = match self.output {
            OutputMode::Inherit => {
                let status = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(|e| ScaffoldError::spawn(cmd_str.clone(), e))?;
                (status.code(), status.success(), String::new(), String::new())
            }
            OutputMode::Capture => {
                let output = cmd
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .map_err(|e| ScaffoldError::spawn(cmd_str.clone(), e))?;
                (
                    output.status.code(),
                    output.status.success(),
                    String::from_utf8_lossy(&output.stdout).to_string(),
                    String::from_utf8_lossy(&output.stderr).to_string(),
                )
            }
        };

        debug!(
            "Command finished: success={}, exit_code={:?}, stdout_len={}, stderr_len={}",
            success,
            exit_code,
            stdout.len(),
            stderr.len()
        );
        if !stdout.is_empty() {
            debug!("Command stdout: {}", stdout);
        }
        if !stderr.is_empty() {
            debug!("Command stderr: {}", stderr);
        }

        Ok(ProcessResult {
            command: cmd_str,
            exit_code,
            stdout,
            stderr,
            success,
        })
    }
}

/// Render a command line for logs and errors, skipping empty parts
fn command_line(command: &str, args: &[&str]) -> String {
    std::iter::once(command)
        .chain(args.iter().copied())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false, OutputMode::Inherit)
    }
}
