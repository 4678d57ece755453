//! Documentation rewriting for amisync
//!
//! Two passes run over the documentation tree once every region has resolved:
//!
//! - [`readme`] - bumps the image name version marker in each deployment
//!   mode's `README.md`
//! - [`manifest`] - replaces the current `# <region> v<version> <label>: <id>`
//!   line per region in the AMI manifest
//!
//! Files are read whole, transformed in memory, and written back in a single
//! write only when their content changed.
//!
//! ```no_run
//! use amisync_core::{Flavor, LocalFs, RegionImageMap, RunConfig};
//! use amisync_docs::{DocRewriter, DocsLayout};
//!
//! fn main() -> amisync_core::Result<()> {
//!     let config = RunConfig::new("126027368216", ["us-east-1"], Flavor::Oss, "14.2.0")?;
//!     let mut images = RegionImageMap::new();
//!     images.insert("us-east-1", "ami-0123456789abcdef0")?;
//!
//!     let layout = DocsLayout::new("examples/aws/terraform");
//!     let report = DocRewriter::new(&LocalFs, &layout).rewrite(&config, &images)?;
//!     println!("{} file(s) changed", report.files_changed());
//!     Ok(())
//! }
//! ```

pub mod layout;
pub mod manifest;
pub mod readme;
pub mod report;
pub mod rewriter;

pub use layout::{DocsLayout, DEFAULT_DOCS_DIR, DEFAULT_MANIFEST, README_NAME};
pub use report::{FileRewrite, ManifestRewrite, RegionLineUpdate, RewriteReport};
pub use rewriter::{DocRewriter, WriteMode};
