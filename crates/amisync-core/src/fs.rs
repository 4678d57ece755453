//! Filesystem capability used by the documentation rewriter

use std::path::Path;
use tracing::debug;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }

    /// Dot-prefixed entries are hidden
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Whole-file text access to the documentation tree.
///
/// Errors are plain I/O errors so callers can classify them per file.
pub trait DocFs {
    /// List entries directly under `path`, sorted by name
    fn list_dir(&self, path: &Path) -> std::io::Result<Vec<DirEntryInfo>>;

    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Overwrite a whole file in one write
    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()>;
}

/// [`DocFs`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl DocFs for LocalFs {
    fn list_dir(&self, path: &Path) -> std::io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            entries.push(DirEntryInfo::new(
                entry.file_name().to_string_lossy(),
                is_dir,
            ));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        debug!("Writing {} bytes to {}", contents.len(), path.display());
        std::fs::write(path, contents)
    }
}
