//! Template identifiers and the recipe data each one carries
//!
//! A recipe is static data: which generator template to invoke, how to
//! reshape the generated source tree, which files to replace, and which
//! packages to add afterwards.

use crate::{core::react, error::ScaffoldError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Known template identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    React,
}

impl Template {
    /// Every template the dispatcher accepts
    pub const ALL: &'static [Template] = &[Template::React];

    /// Identifier as given on the command line
    pub const fn id(self) -> &'static str {
        match self {
            Self::React => "react",
        }
    }

    /// Recipe backing this template
    pub fn recipe(self) -> &'static TemplateRecipe {
        match self {
            Self::React => &react::RECIPE,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Template {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|template| template.id() == s)
            .ok_or_else(|| ScaffoldError::unknown_template(s))
    }
}

/// A file replaced with fixed content during scaffolding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Logical name, used in logs and reports
    pub key: &'static str,
    /// Destination relative to the project's source directory
    pub path_from_src: &'static str,
    /// Literal file content
    pub contents: &'static str,
}

/// Everything needed to scaffold one template
#[derive(Debug)]
pub struct TemplateRecipe {
    /// Package passed to `<package manager> create`
    pub generator_package: &'static str,
    /// Value of the generator's `--template` option
    pub generator_template: &'static str,
    /// Source directory inside the generated project
    pub source_dir: &'static str,
    /// Directories removed recursively from the source directory
    pub removed_dirs: &'static [&'static str],
    /// Files removed from the source directory
    pub removed_files: &'static [&'static str],
    /// Directories created in the source directory
    pub created_dirs: &'static [&'static str],
    /// Files overwritten with fixed content
    pub files: &'static [TemplateFile],
    /// Packages added after the baseline install
    pub extra_dependencies: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_template() {
        assert_eq!("react".parse::<Template>().unwrap(), Template::React);
        assert_eq!(Template::default(), Template::React);
    }

    #[test]
    fn test_parse_unknown_template() {
        let err = "svelte".parse::<Template>().unwrap_err();
        assert!(matches!(err, ScaffoldError::UnknownTemplate { ref template } if template == "svelte"));
    }

    #[test]
    fn test_template_ids_are_case_sensitive() {
        assert!("React".parse::<Template>().is_err());
    }

    #[test]
    fn test_every_template_has_a_recipe() {
        for template in Template::ALL {
            let recipe = template.recipe();
            assert!(!recipe.files.is_empty());
            assert!(!recipe.source_dir.is_empty());
        }
    }
}
