//! Core scaffolding functionality
//!
//! Contains the request model, template recipes, the toolchain seams and the
//! pipeline that ties them together.

pub mod batch;
pub mod context;
pub mod react;
pub mod request;
pub mod scaffolder;
pub mod template;
pub mod toolchain;

pub use batch::{Batch, BatchPolicy, BatchReport, FsOperation};
pub use context::ScaffoldContext;
pub use request::ScaffoldRequest;
pub use scaffolder::{ScaffoldReport, Scaffolder, Stage};
pub use template::{Template, TemplateFile, TemplateRecipe};
pub use toolchain::{PackageInstaller, PackageManager, ProjectGenerator};
