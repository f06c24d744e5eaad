use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for files produced by the scaffolder.
///
/// Scaffolded files are stubs the user will edit, so an existing file is
/// never overwritten; the write reports [`WriteResult::AlreadyExists`]
/// instead.
pub trait ScaffoldFile {
    /// Get the file path relative to the base directory.
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content.
    fn render(&self) -> String;

    /// Write the file to disk, creating parent directories as needed.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        if path.exists() {
            return Ok(WriteResult::AlreadyExists(path));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.render())?;

        Ok(WriteResult::Written(path))
    }
}

/// Result of a scaffold write operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written(PathBuf),
    /// File already existed and was left untouched.
    AlreadyExists(PathBuf),
}

impl WriteResult {
    /// The path the write targeted.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written(path) | WriteResult::AlreadyExists(path) => path,
        }
    }
}
