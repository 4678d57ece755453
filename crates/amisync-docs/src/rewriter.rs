//! Runs both documentation passes

use crate::layout::DocsLayout;
use crate::report::RewriteReport;
use crate::{manifest, readme};
use amisync_core::{DocFs, Error, RegionImageMap, Result, RunConfig};
use tracing::info;

/// Whether rewritten files are written back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write changed files
    #[default]
    Apply,
    /// Compute changes only
    DryRun,
}

impl WriteMode {
    pub fn writes(&self) -> bool {
        matches!(self, WriteMode::Apply)
    }
}

/// Rewrites the documentation tree for a fully resolved run
pub struct DocRewriter<'a, F: DocFs + ?Sized> {
    fs: &'a F,
    layout: &'a DocsLayout,
    mode: WriteMode,
}

impl<'a, F: DocFs + ?Sized> DocRewriter<'a, F> {
    pub fn new(fs: &'a F, layout: &'a DocsLayout) -> Self {
        Self {
            fs,
            layout,
            mode: WriteMode::Apply,
        }
    }

    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Update README markers, then the manifest.
    ///
    /// `images` must hold exactly the regions of `config`.
    pub fn rewrite(&self, config: &RunConfig, images: &RegionImageMap) -> Result<RewriteReport> {
        if !images.covers_exactly(config.regions()) {
            return Err(Error::invalid_config(format!(
                "resolved images cover {} region(s), expected exactly: {}",
                images.len(),
                config.regions().join(", ")
            )));
        }

        info!(
            "Updating documentation under {} for {} {}",
            self.layout.root().display(),
            config.flavor(),
            config.version()
        );

        let readmes = readme::update_readmes(
            self.fs,
            self.layout,
            config.flavor(),
            config.version(),
            self.mode,
        )?;
        let manifest = manifest::update_manifest(
            self.fs,
            self.layout,
            images,
            config.flavor(),
            config.version(),
            self.mode,
        )?;

        Ok(RewriteReport { readmes, manifest })
    }
}
