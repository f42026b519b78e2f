//! Validated scaffolding request

use crate::{
    core::template::Template,
    error::{Result, ScaffoldError},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project name meaning "scaffold into the target directory itself"
pub const IN_PLACE: &str = ".";

/// What to scaffold, and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldRequest {
    /// Parent directory the project is generated in
    pub target_path: PathBuf,
    /// Project name, or [`IN_PLACE`]
    pub project_name: String,
    /// Template to scaffold
    pub template: Template,
}

impl ScaffoldRequest {
    /// Validate raw command-line values.
    ///
    /// Checks run in a fixed order: presence of path and name, then the
    /// path's shape, then the template identifier.
    pub fn parse(path: Option<&str>, name: Option<&str>, template: &str) -> Result<Self> {
        let (Some(path), Some(name)) = (
            path.filter(|p| !p.is_empty()),
            name.filter(|n| !n.is_empty()),
        ) else {
            return Err(ScaffoldError::validation("--path OR --name is not defined"));
        };

        if path.starts_with('~') {
            return Err(ScaffoldError::validation(format!(
                "--path must not start with '~' (got {path}); please input a relative or absolute path, e.g. /home/..."
            )));
        }

        let template = if template.is_empty() {
            Template::default()
        } else {
            template.parse::<Template>()?
        };

        Ok(Self {
            target_path: PathBuf::from(path),
            project_name: name.to_string(),
            template,
        })
    }

    /// Whether the project is generated directly in [`Self::target_path`]
    pub fn is_in_place(&self) -> bool {
        self.project_name == IN_PLACE
    }

    /// Root directory of the generated project
    pub fn project_dir(&self) -> PathBuf {
        if self.is_in_place() {
            self.target_path.clone()
        } else {
            self.target_path.join(&self.project_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = ScaffoldRequest::parse(Some("./work"), Some("myapp"), "react").unwrap();
        assert_eq!(request.target_path, PathBuf::from("./work"));
        assert_eq!(request.template, Template::React);
        assert!(!request.is_in_place());
        assert_eq!(request.project_dir(), PathBuf::from("./work/myapp"));
    }

    #[test]
    fn test_in_place_request() {
        let request = ScaffoldRequest::parse(Some("/tmp/site"), Some("."), "react").unwrap();
        assert!(request.is_in_place());
        assert_eq!(request.project_dir(), PathBuf::from("/tmp/site"));
    }

    #[test]
    fn test_missing_path_or_name() {
        for (path, name) in [
            (None, Some("myapp")),
            (Some("/tmp"), None),
            (None, None),
            (Some(""), Some("myapp")),
            (Some("/tmp"), Some("")),
        ] {
            let err = ScaffoldRequest::parse(path, name, "react").unwrap_err();
            assert_eq!(err.to_string(), "--path OR --name is not defined");
        }
    }

    #[test]
    fn test_home_shorthand_rejected() {
        let err = ScaffoldRequest::parse(Some("~/projects"), Some("myapp"), "react").unwrap_err();
        assert!(matches!(err, ScaffoldError::Validation { .. }));
        assert!(err.to_string().contains("relative or absolute path"));
    }

    #[test]
    fn test_missing_flags_checked_before_template() {
        let err = ScaffoldRequest::parse(None, Some("myapp"), "vue").unwrap_err();
        assert!(matches!(err, ScaffoldError::Validation { .. }));
    }

    #[test]
    fn test_empty_template_falls_back_to_default() {
        let request = ScaffoldRequest::parse(Some("/tmp"), Some("myapp"), "").unwrap();
        assert_eq!(request.template, Template::React);
    }

    #[test]
    fn test_unknown_template() {
        let err = ScaffoldRequest::parse(Some("/tmp"), Some("myapp"), "vue").unwrap_err();
        assert_eq!(err.to_string(), "No available template: vue");
    }
}
