//! # Project Scaffolder
//!
//! Creates front-end application skeletons. A package manager generates the
//! baseline project, then the tree is reshaped, a fixed set of files is
//! replaced and extra dependencies are installed.
//!
//! ## Features
//!
//! - Validation of every input before any side effect
//! - Template recipes as static data
//! - Concurrent filesystem batches with explicit failure policies
//! - Package manager access behind `ProjectGenerator`/`PackageInstaller`
//!
//! ## Example
//!
//! ```no_run
//! use project_scaffolder::{
//!     config::{BatchPolicies, PackageManagerConfig},
//!     core::{PackageManager, ScaffoldRequest, Scaffolder},
//!     utils::ProcessRunner,
//! };
//!
//! let request = ScaffoldRequest::parse(Some("./work"), Some("myapp"), "react")?;
//! let pnpm = PackageManager::new(PackageManagerConfig::default(), ProcessRunner::default());
//! let scaffolder = Scaffolder::new(request.template.recipe(), &pnpm, &pnpm, BatchPolicies::default());
//! let report = scaffolder.scaffold(&request)?;
//! println!("Project ready at {}", report.project_root.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
