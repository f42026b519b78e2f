//! File system utility functions
//!
//! Thin, logged wrappers over `std::fs` used by the scaffolding batches.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug, Clone, Copy)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Create directories recursively
    #[instrument(skip(self))]
    pub fn create_dir_all<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path)
    }

    /// Remove a file if it exists
    #[instrument(skip(self))]
    pub fn remove_file_if_exists<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<bool> {
        let path = path.as_ref();

        match fs::remove_file(path) {
            Ok(()) => {
                debug!("Removed file: {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("File does not exist: {}", path.display());
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Remove a directory and all its contents if it exists
    #[instrument(skip(self))]
    pub fn remove_dir_all_if_exists<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<bool> {
        let path = path.as_ref();

        match fs::remove_dir_all(path) {
            Ok(()) => {
                debug!("Removed directory: {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Directory does not exist: {}", path.display());
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Write content to a file, replacing it and creating parent directories if needed
    #[instrument(skip(self, contents))]
    pub fn write_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> io::Result<()> {
        let path = path.as_ref();

        debug!("Writing file: {}", path.display());

        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }

        fs::write(path, contents)?;
        debug!("File written successfully");
        Ok(())
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
