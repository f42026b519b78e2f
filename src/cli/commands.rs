//! Dispatch from a validated configuration to a template's scaffolder

use crate::{
    config::Config,
    core::{scaffolder::Scaffolder, toolchain::PackageManager},
    utils::process::ProcessRunner,
};
use anyhow::Context;
use tracing::{info, instrument, warn};

/// Scaffold the project described by `config`
#[instrument(skip(config), fields(template = %config.request.template))]
pub fn execute(config: &Config) -> anyhow::Result<()> {
    let request = &config.request;
    let recipe = request.template.recipe();

    let toolchain = PackageManager::new(
        config.package_manager.clone(),
        ProcessRunner::new(config.debug, config.tool_output),
    );
    let scaffolder = Scaffolder::new(recipe, &toolchain, &toolchain, config.policies);

    let report = scaffolder
        .scaffold(request)
        .with_context(|| {
            format!(
                "Failed to scaffold {} project '{}'",
                request.template, request.project_name
            )
        })?;

    if !report.is_clean() {
        warn!(
            "Project scaffolded with failures: {}; {}",
            report.restructure, report.rewrite
        );
    }

    info!(
        "Done. Next: cd {} && {} run dev",
        report.project_root.display(),
        toolchain.program()
    );
    Ok(())
}
