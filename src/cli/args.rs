//! Command-line argument parsing

use crate::core::batch::BatchPolicy;
use clap::Parser;

/// Scaffold a front-end project on top of a package-manager toolchain
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "scaffolder")]
pub struct Args {
    /// Target parent directory (no `~` shorthand)
    #[arg(long, alias = "p", value_name = "PATH")]
    pub path: Option<String>,

    /// Project name; `.` scaffolds into PATH itself
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Template identifier
    #[arg(long = "t", value_name = "TEMPLATE", default_value = "react")]
    pub template: String,

    /// Package manager executable (pnpm-compatible)
    #[arg(long, value_name = "PROGRAM")]
    pub package_manager: Option<String>,

    /// Failure policy for the folder restructuring batch
    #[arg(long, value_enum, default_value_t = BatchPolicy::BestEffort)]
    pub restructure_policy: BatchPolicy,

    /// Failure policy for the file rewriting batch
    #[arg(long, value_enum, default_value_t = BatchPolicy::BestEffort)]
    pub rewrite_policy: BatchPolicy,

    /// Capture package manager output instead of streaming it
    #[arg(long)]
    pub quiet_tools: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Result<Args, clap::Error> {
    Args::try_parse()
}
