//! AWS image lookup for amisync
//!
//! This crate finds the published AMI for a flavor and version in each
//! requested region:
//!
//! - [`traits`] - the region-scoped `ImageCatalog` capability and its connector
//! - [`aws`] - the AWS CLI backed catalog (`aws ec2 describe-images`)
//! - [`resolver`] - exactly-one-image resolution for a single region
//! - [`orchestrator`] - sequential, fail-fast resolution across regions

pub mod aws;
pub mod orchestrator;
pub mod resolver;
pub mod traits;
mod utils;

#[cfg(test)]
mod tests;

pub use aws::{AwsCliCatalog, AwsCliConnector, AWS_CLI};
pub use orchestrator::resolve_all;
pub use resolver::resolve;
pub use traits::{CatalogConnector, ImageCatalog, ImageQuery, ImageRecord};
