//! Location of the documentation tree

use std::path::{Path, PathBuf};

/// Default documentation root, relative to the tool's working directory
pub const DEFAULT_DOCS_DIR: &str = "../../examples/aws/terraform";

/// Default manifest file name under the documentation root
pub const DEFAULT_MANIFEST: &str = "AMIS.md";

/// README file name inside each deployment mode directory
pub const README_NAME: &str = "README.md";

/// Documentation root plus the manifest file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsLayout {
    root: PathBuf,
    manifest_name: String,
}

impl DocsLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest_name: DEFAULT_MANIFEST.to_string(),
        }
    }

    pub fn with_manifest(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest_name)
    }

    pub fn readme_path(&self, mode: &str) -> PathBuf {
        self.root.join(mode).join(README_NAME)
    }
}

impl Default for DocsLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DOCS_DIR)
    }
}
