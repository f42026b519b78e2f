//! Error types for the scaffolder
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the scaffolder
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Invalid or missing input, detected before any side effect
    #[error("{message}")]
    Validation { message: String },

    /// Template identifier with no recipe behind it
    #[error("No available template: {template}")]
    UnknownTemplate { template: String },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External tool could not be started
    #[error("Failed to execute `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool ran but did not succeed
    #[error("Process exited with {}: `{command}`", describe_exit(.exit_code))]
    Process {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// A batch under the all-or-nothing policy had failed members
    #[error("{batch}: {failed} of {total} operations failed ({details})")]
    Batch {
        batch: String,
        failed: usize,
        total: usize,
        details: String,
    },
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl ScaffoldError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new unknown-template error
    pub fn unknown_template(template: impl Into<String>) -> Self {
        Self::UnknownTemplate {
            template: template.into(),
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Create a new batch error
    pub fn batch(
        batch: impl Into<String>,
        failed: usize,
        total: usize,
        details: impl Into<String>,
    ) -> Self {
        Self::Batch {
            batch: batch.into(),
            failed,
            total,
            details: details.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_error_reports_exit_code() {
        let err = ScaffoldError::process("pnpm install", Some(3), "");
        assert_eq!(err.to_string(), "Process exited with code 3: `pnpm install`");
    }

    #[test]
    fn test_process_error_without_code() {
        let err = ScaffoldError::process("pnpm install", None, "");
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_unknown_template_message() {
        let err = ScaffoldError::unknown_template("vue");
        assert_eq!(err.to_string(), "No available template: vue");
    }
}
