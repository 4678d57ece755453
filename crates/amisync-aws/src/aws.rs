//! AWS image catalog implementation
//!
//! Lists AMIs through `aws ec2 describe-images`. Each region gets its own
//! catalog so credentials and defaults resolve per region.

use amisync_core::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

use crate::traits::{CatalogConnector, ImageCatalog, ImageQuery, ImageRecord};
use crate::utils;

/// AWS CLI executable name
pub const AWS_CLI: &str = "aws";

/// Region-scoped catalog backed by the AWS CLI
#[derive(Debug, Clone)]
pub struct AwsCliCatalog {
    program: PathBuf,
    region: String,
}

impl AwsCliCatalog {
    pub fn new(program: impl Into<PathBuf>, region: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            region: region.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl ImageCatalog for AwsCliCatalog {
    fn region(&self) -> &str {
        &self.region
    }

    async fn describe_images(&self, query: &ImageQuery) -> Result<Vec<ImageRecord>> {
        let args = utils::describe_images_args(&self.region, query);
        debug!("Running {} {}", self.program.display(), args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .env("AWS_REGION", &self.region)
            .env("AWS_PAGER", "")
            .output()
            .await
            .map_err(|e| {
                Error::catalog_query(
                    &self.region,
                    &query.name,
                    format!("failed to run {}: {}", self.program.display(), e),
                )
            })?;

        if !output.status.success() {
            return Err(Error::catalog_query(
                &self.region,
                &query.name,
                format!(
                    "describe-images exited with {}: {}",
                    output.status,
                    utils::first_stderr_line(&output.stderr)
                ),
            ));
        }

        utils::parse_describe_images(&output.stdout).map_err(|e| {
            Error::catalog_query(
                &self.region,
                &query.name,
                format!("unexpected describe-images output: {}", e),
            )
        })
    }
}

/// Opens [`AwsCliCatalog`] sessions
#[derive(Debug, Clone)]
pub struct AwsCliConnector {
    program: PathBuf,
}

impl AwsCliConnector {
    /// Use a specific AWS CLI executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Find the AWS CLI on `PATH`
    pub fn detect() -> Result<Self> {
        utils::find_cli(AWS_CLI).map(Self::new).ok_or_else(|| {
            Error::invalid_config(
                "AWS CLI not found on PATH. Install it from https://aws.amazon.com/cli/",
            )
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl CatalogConnector for AwsCliConnector {
    fn connect(&self, region: &str) -> Result<Box<dyn ImageCatalog>> {
        if region.is_empty() {
            return Err(Error::catalog_connect(region, "region must not be empty"));
        }
        debug!("Opening image catalog session for {}", region);
        Ok(Box::new(AwsCliCatalog::new(self.program.clone(), region)))
    }
}
