//! External toolchain capabilities
//!
//! The pipeline only talks to the package manager through these traits, so
//! tests can swap in fakes that never spawn a process.

use crate::{
    config::PackageManagerConfig,
    error::Result,
    utils::process::{ProcessResult, ProcessRunner},
};
use std::path::Path;
use tracing::instrument;

/// Generates a baseline project from a named framework template
pub trait ProjectGenerator {
    /// Create `project_name` inside `parent`. `.` generates into `parent` itself.
    fn generate(
        &self,
        parent: &Path,
        project_name: &str,
        package: &str,
        template: &str,
    ) -> Result<ProcessResult>;
}

/// Installs a project's dependencies
pub trait PackageInstaller {
    /// Install everything the project already declares
    fn install(&self, project_root: &Path) -> Result<ProcessResult>;

    /// Add new dependencies by name
    fn add(&self, project_root: &Path, packages: &[&str]) -> Result<ProcessResult>;
}

/// A pnpm-compatible package manager executable
#[derive(Debug, Clone)]
pub struct PackageManager {
    config: PackageManagerConfig,
    runner: ProcessRunner,
}

impl PackageManager {
    #[must_use]
    pub const fn new(config: PackageManagerConfig, runner: ProcessRunner) -> Self {
        Self { config, runner }
    }

    pub fn program(&self) -> &str {
        &self.config.program
    }

    fn run(&self, cwd: &Path, subcommand: &[String], extra: &[&str]) -> Result<ProcessResult> {
        let args: Vec<&str> = subcommand
            .iter()
            .map(String::as_str)
            .chain(extra.iter().copied())
            .collect();
        self.runner.run(&self.config.program, &args, cwd)
    }
}

impl ProjectGenerator for PackageManager {
    #[instrument(skip(self))]
    fn generate(
        &self,
        parent: &Path,
        project_name: &str,
        package: &str,
        template: &str,
    ) -> Result<ProcessResult> {
        self.run(
            parent,
            &self.config.create_args,
            &[package, project_name, "--template", template],
        )
    }
}

impl PackageInstaller for PackageManager {
    #[instrument(skip(self))]
    fn install(&self, project_root: &Path) -> Result<ProcessResult> {
        self.run(project_root, &self.config.install_args, &[])
    }

    #[instrument(skip(self))]
    fn add(&self, project_root: &Path, packages: &[&str]) -> Result<ProcessResult> {
        self.run(project_root, &self.config.add_args, packages)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::utils::process::OutputMode;
    use tempfile::TempDir;

    fn echo_manager() -> PackageManager {
        let config = PackageManagerConfig {
            program: "echo".to_string(),
            ..PackageManagerConfig::default()
        };
        PackageManager::new(config, ProcessRunner::new(false, OutputMode::Capture))
    }

    #[test]
    fn test_generate_command_line() {
        let temp_dir = TempDir::new().unwrap();
        let result = echo_manager()
            .generate(temp_dir.path(), "myapp", "vite@latest", "react")
            .unwrap();
        assert_eq!(
            result.stdout.trim(),
            "create vite@latest myapp --template react"
        );
    }

    #[test]
    fn test_install_and_add_command_lines() {
        let temp_dir = TempDir::new().unwrap();
        let manager = echo_manager();

        let install = manager.install(temp_dir.path()).unwrap();
        assert_eq!(install.stdout.trim(), "install");

        let add = manager.add(temp_dir.path(), &["axios", "zustand"]).unwrap();
        assert_eq!(add.stdout.trim(), "add axios zustand");
    }
}
