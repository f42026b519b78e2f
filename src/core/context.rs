//! Working-directory context threaded through the pipeline
//!
//! Each step receives the directory it operates in and hands the next step a
//! new context. The process-wide current directory is never touched.

use std::path::{Path, PathBuf};

/// Directory a pipeline step operates in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldContext {
    working_dir: PathBuf,
}

impl ScaffoldContext {
    /// Start a context at `dir`
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            working_dir: dir.into(),
        }
    }

    /// Current working directory of this context
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Context for a subdirectory
    #[must_use]
    pub fn enter<P: AsRef<Path>>(&self, relative: P) -> Self {
        Self::new(self.working_dir.join(relative))
    }

    /// Context for the parent directory
    #[must_use]
    pub fn leave(&self) -> Self {
        let mut dir = self.working_dir.clone();
        if !dir.pop() || dir.as_os_str().is_empty() {
            dir = PathBuf::from(".");
        }
        Self::new(dir)
    }

    /// Resolve a path relative to this context
    pub fn resolve<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.working_dir.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_leave() {
        let root = ScaffoldContext::new("/work/myapp");
        let src = root.enter("src");
        assert_eq!(src.working_dir(), Path::new("/work/myapp/src"));
        assert_eq!(src.leave(), root);
    }

    #[test]
    fn test_leave_relative_single_component() {
        let src = ScaffoldContext::new("src");
        assert_eq!(src.leave().working_dir(), Path::new("."));
    }

    #[test]
    fn test_resolve_parent_relative() {
        let src = ScaffoldContext::new("/work/myapp/src");
        assert_eq!(
            src.resolve("../vite.config.js"),
            PathBuf::from("/work/myapp/src/../vite.config.js")
        );
    }
}
