//! # amisync-core
//!
//! Core library for amisync providing:
//! - The closed set of image flavors and their naming conventions
//! - The validated run configuration handed over by the CLI
//! - The region to image identifier map built during resolution
//! - The filesystem capability used to rewrite documentation
//! - The shared error taxonomy

pub mod error;
pub mod fs;
pub mod types;

pub use error::{Error, Result};
pub use fs::{DirEntryInfo, DocFs, LocalFs};
pub use types::{Flavor, RegionImageMap, RunConfig, IMAGE_NAME_PREFIX};
