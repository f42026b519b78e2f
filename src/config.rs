//! Configuration management for the scaffolder
//!
//! Centralizes configuration options and validates the request before any
//! side effect happens.

use crate::{
    cli::Args,
    core::{batch::BatchPolicy, request::ScaffoldRequest},
    error::ScaffoldError,
    utils::process::OutputMode,
};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Validated scaffolding request
    pub request: ScaffoldRequest,
    /// Package manager configuration
    pub package_manager: PackageManagerConfig,
    /// Failure policy per filesystem batch
    pub policies: BatchPolicies,
    /// Whether tool output is streamed or captured
    pub tool_output: OutputMode,
}

/// Package manager configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManagerConfig {
    /// Executable to invoke (pnpm-compatible command line)
    pub program: String,
    /// Subcommand generating a project from a template package
    pub create_args: Vec<String>,
    /// Subcommand installing declared dependencies
    pub install_args: Vec<String>,
    /// Subcommand adding new dependencies
    pub add_args: Vec<String>,
}

/// Failure policy for each filesystem batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPolicies {
    /// Folder restructuring
    pub restructure: BatchPolicy,
    /// File rewriting
    pub rewrite: BatchPolicy,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            program: "pnpm".to_string(),
            create_args: vec!["create".to_string()],
            install_args: vec!["install".to_string()],
            add_args: vec!["add".to_string()],
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ScaffoldError> {
        let request = ScaffoldRequest::parse(
            args.path.as_deref(),
            args.name.as_deref(),
            &args.template,
        )?;

        let mut package_manager = PackageManagerConfig::default();
        if let Some(program) = &args.package_manager {
            if program.trim().is_empty() {
                return Err(ScaffoldError::validation(
                    "--package-manager must not be empty",
                ));
            }
            package_manager.program = program.clone();
        }

        Ok(Self {
            debug: args.debug,
            request,
            package_manager,
            policies: BatchPolicies {
                restructure: args.restructure_policy,
                rewrite: args.rewrite_policy,
            },
            tool_output: if args.quiet_tools {
                OutputMode::Capture
            } else {
                OutputMode::Inherit
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::template::Template;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["scaffolder"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&args(&["--path", "/tmp/work", "--name", "myapp"])).unwrap();
        assert_eq!(config.request.template, Template::React);
        assert_eq!(config.package_manager.program, "pnpm");
        assert_eq!(config.policies, BatchPolicies::default());
        assert_eq!(config.policies.restructure, BatchPolicy::BestEffort);
        assert_eq!(config.tool_output, OutputMode::Inherit);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_args(&args(&[
            "--path",
            "/tmp/work",
            "--name",
            "myapp",
            "--package-manager",
            "npm",
            "--rewrite-policy",
            "all-or-nothing",
            "--quiet-tools",
        ]))
        .unwrap();
        assert_eq!(config.package_manager.program, "npm");
        assert_eq!(config.policies.rewrite, BatchPolicy::AllOrNothing);
        assert_eq!(config.policies.restructure, BatchPolicy::BestEffort);
        assert_eq!(config.tool_output, OutputMode::Capture);
    }

    #[test]
    fn test_invalid_request_rejected() {
        let err = Config::from_args(&args(&["--name", "myapp"])).unwrap_err();
        assert_eq!(err.to_string(), "--path OR --name is not defined");

        let err = Config::from_args(&args(&["--path", "/tmp", "--name", "x", "--t", "angular"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "No available template: angular");
    }

    #[test]
    fn test_empty_template_flag_uses_react() {
        let config =
            Config::from_args(&args(&["--path", "/tmp", "--name", "x", "--t="])).unwrap();
        assert_eq!(config.request.template, Template::React);
    }

    #[test]
    fn test_empty_package_manager_rejected() {
        let err = Config::from_args(&args(&[
            "--path",
            "/tmp",
            "--name",
            "x",
            "--package-manager",
            " ",
        ]))
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::Validation { .. }));
    }
}
