//! Type definitions shared by the resolver and the documentation rewriter

pub mod flavor;
pub mod region_map;
pub mod run_config;

pub use flavor::{Flavor, IMAGE_NAME_PREFIX};
pub use region_map::RegionImageMap;
pub use run_config::RunConfig;
