//! Fan-out/fan-in filesystem batches
//!
//! Members of a batch are independent of each other. They are issued
//! together on the rayon pool and the caller resumes once every member has
//! settled. What happens to failed members is decided by a [`BatchPolicy`].

use crate::{
    core::context::ScaffoldContext,
    error::{Result, ScaffoldError},
    utils::fs::FileSystemUtils,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, io, path::PathBuf};
use tracing::{debug, info, instrument, warn};

/// What a batch does with failed members once all members have settled
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum BatchPolicy {
    /// Log failures, report them, carry on
    #[default]
    BestEffort,
    /// Fail the pipeline step if any member failed. Nothing is rolled back.
    AllOrNothing,
}

/// A single filesystem operation, relative to the batch's context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOperation {
    /// Remove a directory and everything below it
    RemoveDirAll(PathBuf),
    /// Remove a single file
    RemoveFile(PathBuf),
    /// Create a directory and any missing parents
    CreateDirAll(PathBuf),
    /// Replace a file's content
    WriteFile {
        path: PathBuf,
        contents: &'static str,
    },
}

impl FsOperation {
    fn apply(&self, fs: FileSystemUtils, ctx: &ScaffoldContext) -> io::Result<OperationStatus> {
        let applied = |done: bool| {
            if done {
                OperationStatus::Applied
            } else {
                OperationStatus::Skipped
            }
        };

        match self {
            Self::RemoveDirAll(path) => fs.remove_dir_all_if_exists(ctx.resolve(path)).map(applied),
            Self::RemoveFile(path) => fs.remove_file_if_exists(ctx.resolve(path)).map(applied),
            Self::CreateDirAll(path) => fs
                .create_dir_all(ctx.resolve(path))
                .map(|()| OperationStatus::Applied),
            Self::WriteFile { path, contents } => fs
                .write_file(ctx.resolve(path), contents)
                .map(|()| OperationStatus::Applied),
        }
    }
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoveDirAll(path) => write!(f, "remove dir {}", path.display()),
            Self::RemoveFile(path) => write!(f, "remove file {}", path.display()),
            Self::CreateDirAll(path) => write!(f, "create dir {}", path.display()),
            Self::WriteFile { path, .. } => write!(f, "write {}", path.display()),
        }
    }
}

/// Successful settlement of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    /// The filesystem was changed
    Applied,
    /// Nothing to do, the target was already absent
    Skipped,
}

/// Settled outcome of one batch member
#[derive(Debug)]
pub struct OperationOutcome {
    pub operation: FsOperation,
    pub result: io::Result<OperationStatus>,
}

/// Every settled outcome of a batch, in submission order
#[derive(Debug)]
pub struct BatchReport {
    pub name: &'static str,
    pub policy: BatchPolicy,
    pub outcomes: Vec<OperationOutcome>,
}

impl BatchReport {
    /// Members that failed
    pub fn failures(&self) -> impl Iterator<Item = (&FsOperation, &io::Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.operation, e)))
    }

    /// Number of members that changed the filesystem
    pub fn applied(&self) -> usize {
        self.count_status(OperationStatus::Applied)
    }

    /// Number of members that found nothing to do
    pub fn skipped(&self) -> usize {
        self.count_status(OperationStatus::Skipped)
    }

    /// Whether every member settled successfully
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    fn count_status(&self, status: OperationStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, Ok(s) if s == status))
            .count()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} operations, {} applied, {} skipped, {} failed",
            self.name,
            self.outcomes.len(),
            self.applied(),
            self.skipped(),
            self.failures().count()
        )
    }
}

/// A named set of independent filesystem operations
#[derive(Debug, Clone)]
pub struct Batch {
    name: &'static str,
    operations: Vec<FsOperation>,
}

impl Batch {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            operations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, operations: impl IntoIterator<Item = FsOperation>) -> Self {
        self.operations.extend(operations);
        self
    }

    /// Run every member concurrently inside `ctx` and wait for all of them.
    ///
    /// Under [`BatchPolicy::AllOrNothing`] a [`ScaffoldError::Batch`] is
    /// returned after settlement if any member failed.
    #[instrument(skip(self, ctx), fields(batch = self.name, size = self.operations.len()))]
    pub fn run(self, ctx: &ScaffoldContext, policy: BatchPolicy) -> Result<BatchReport> {
        debug!("Running batch in {}", ctx.working_dir().display());

        let fs = FileSystemUtils::new();
        let outcomes: Vec<OperationOutcome> = self
            .operations
            .into_par_iter()
            .map(|operation| {
                let result = operation.apply(fs, ctx);
                OperationOutcome { operation, result }
            })
            .collect();

        let report = BatchReport {
            name: self.name,
            policy,
            outcomes,
        };

        for (operation, error) in report.failures() {
            warn!("{}: {} failed: {}", report.name, operation, error);
        }
        info!("{}", report);

        if policy == BatchPolicy::AllOrNothing && !report.is_clean() {
            let details = report
                .failures()
                .map(|(operation, error)| format!("{operation}: {error}"))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ScaffoldError::batch(
                report.name,
                report.failures().count(),
                report.outcomes.len(),
                details,
            ));
        }

        Ok(report)
    }
}
