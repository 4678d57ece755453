//! What a rewrite did

use std::path::PathBuf;

/// Outcome for a single documentation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRewrite {
    pub path: PathBuf,
    /// Markers or manifest lines replaced, including ones already at the
    /// target value
    pub replacements: usize,
    /// New content differs from the old content
    pub changed: bool,
    /// New content was written to disk
    pub written: bool,
}

/// Manifest update for one region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLineUpdate {
    pub region: String,
    pub image_id: String,
    /// Lines found for the region and flavor; only the newest is replaced
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRewrite {
    pub file: FileRewrite,
    pub regions: Vec<RegionLineUpdate>,
}

/// Outcome of both rewrite passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub readmes: Vec<FileRewrite>,
    pub manifest: ManifestRewrite,
}

impl RewriteReport {
    /// Files whose content changed
    pub fn files_changed(&self) -> usize {
        self.readmes
            .iter()
            .chain(std::iter::once(&self.manifest.file))
            .filter(|f| f.changed)
            .count()
    }

    /// Regions with no manifest line for this flavor
    pub fn unmatched_regions(&self) -> impl Iterator<Item = &str> {
        self.manifest
            .regions
            .iter()
            .filter(|r| r.lines == 0)
            .map(|r| r.region.as_str())
    }
}
