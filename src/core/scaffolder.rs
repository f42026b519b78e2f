//! Scaffolding pipeline
//!
//! Runs a [`TemplateRecipe`] through a fixed, strictly ordered sequence of
//! stages. Each stage receives the context produced by the previous one; the
//! first fatal error stops the pipeline and leaves the tree as it is.

use crate::{
    config::BatchPolicies,
    core::{
        batch::{Batch, BatchReport, FsOperation},
        context::ScaffoldContext,
        request::ScaffoldRequest,
        template::TemplateRecipe,
        toolchain::{PackageInstaller, ProjectGenerator},
    },
    error::{Result, ScaffoldError},
    utils::fs::FileSystemUtils,
};
use std::{fmt, path::PathBuf};
use tracing::{info, instrument};

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    RestructureFolders,
    RewriteFiles,
    InstallDependencies,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::RestructureFolders => "restructure folders",
            Self::RewriteFiles => "rewrite files",
            Self::InstallDependencies => "install dependencies",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// What a completed run did
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Root of the scaffolded project
    pub project_root: PathBuf,
    /// Outcomes of the folder restructuring batch
    pub restructure: BatchReport,
    /// Outcomes of the file rewriting batch
    pub rewrite: BatchReport,
}

impl ScaffoldReport {
    /// Whether both batches settled without failures
    pub fn is_clean(&self) -> bool {
        self.restructure.is_clean() && self.rewrite.is_clean()
    }
}

/// Runs one recipe against a generator and an installer
pub struct Scaffolder<'a, G, I> {
    recipe: &'a TemplateRecipe,
    generator: &'a G,
    installer: &'a I,
    policies: BatchPolicies,
}

impl<'a, G, I> Scaffolder<'a, G, I>
where
    G: ProjectGenerator,
    I: PackageInstaller,
{
    pub const fn new(
        recipe: &'a TemplateRecipe,
        generator: &'a G,
        installer: &'a I,
        policies: BatchPolicies,
    ) -> Self {
        Self {
            recipe,
            generator,
            installer,
            policies,
        }
    }

    /// Run every stage in order
    #[instrument(skip(self), fields(template = %request.template))]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> Result<ScaffoldReport> {
        info!(
            "Scaffolding {} project: {} on {}",
            request.template,
            request.project_name,
            request.target_path.display()
        );

        let project = self.init(request)?;
        info!("Stage '{}' succeeded", Stage::Init);

        let (src, restructure) = self.restructure_folders(&project)?;
        info!("Stage '{}' succeeded", Stage::RestructureFolders);

        let rewrite = self.rewrite_files(&src)?;
        info!("Stage '{}' succeeded", Stage::RewriteFiles);

        let project = self.install_dependencies(&src)?;
        info!("Stage '{}' succeeded", Stage::InstallDependencies);

        info!(
            "Stage '{}': project ready at {}",
            Stage::Done,
            project.working_dir().display()
        );
        Ok(ScaffoldReport {
            project_root: project.working_dir().to_path_buf(),
            restructure,
            rewrite,
        })
    }

    /// Create the target directory and generate the baseline project in it
    #[instrument(skip(self, request))]
    pub fn init(&self, request: &ScaffoldRequest) -> Result<ScaffoldContext> {
        let target = ScaffoldContext::new(&request.target_path);
        FileSystemUtils::new()
            .create_dir_all(target.working_dir())
            .map_err(|e| {
                ScaffoldError::file_system("create directory", target.working_dir(), e)
            })?;

        self.generator
            .generate(
                target.working_dir(),
                &request.project_name,
                self.recipe.generator_package,
                self.recipe.generator_template,
            )?
            .ensure_success()?;

        Ok(ScaffoldContext::new(request.project_dir()))
    }

    /// Drop the generator's sample assets and lay out the feature folders
    #[instrument(skip(self, project))]
    pub fn restructure_folders(
        &self,
        project: &ScaffoldContext,
    ) -> Result<(ScaffoldContext, BatchReport)> {
        let src = project.enter(self.recipe.source_dir);

        let batch = Batch::new("restructure folders")
            .with(
                self.recipe
                    .removed_dirs
                    .iter()
                    .map(|dir| FsOperation::RemoveDirAll(dir.into())),
            )
            .with(
                self.recipe
                    .removed_files
                    .iter()
                    .map(|file| FsOperation::RemoveFile(file.into())),
            )
            .with(
                self.recipe
                    .created_dirs
                    .iter()
                    .map(|dir| FsOperation::CreateDirAll(dir.into())),
            );

        let report = batch.run(&src, self.policies.restructure)?;
        info!("Modified folder structure");
        Ok((src, report))
    }

    /// Overwrite the recipe's files with their fixed content
    #[instrument(skip(self, src))]
    pub fn rewrite_files(&self, src: &ScaffoldContext) -> Result<BatchReport> {
        let batch = Batch::new("rewrite files").with(self.recipe.files.iter().map(|file| {
            FsOperation::WriteFile {
                path: file.path_from_src.into(),
                contents: file.contents,
            }
        }));

        let report = batch.run(src, self.policies.rewrite)?;
        info!("Modified file contents");
        Ok(report)
    }

    /// Install the baseline dependencies, then add the recipe's extras
    #[instrument(skip(self, src))]
    pub fn install_dependencies(&self, src: &ScaffoldContext) -> Result<ScaffoldContext> {
        let project = src.leave();

        info!("Installing dependencies");
        self.installer
            .install(project.working_dir())?
            .ensure_success()?;

        if !self.recipe.extra_dependencies.is_empty() {
            info!("Adding {:?}", self.recipe.extra_dependencies);
            self.installer
                .add(project.working_dir(), self.recipe.extra_dependencies)?
                .ensure_success()?;
        }

        Ok(project)
    }
}
