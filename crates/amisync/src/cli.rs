//! CLI argument parsing with clap

use amisync_core::{Flavor, RunConfig};
use amisync_docs::{DocsLayout, WriteMode, DEFAULT_DOCS_DIR, DEFAULT_MANIFEST};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// amisync - Update published AMI IDs in the Terraform documentation
#[derive(Parser, Debug)]
#[command(name = "amisync")]
#[command(author, about, long_about = None)]
pub struct Cli {
    /// AWS account ID that owns the published AMIs
    #[arg(short = 'a', long = "aws-account", env = "AMISYNC_AWS_ACCOUNT")]
    pub aws_account: String,

    /// Comma-separated list of AWS regions to get and update AMIs for
    #[arg(short, long, env = "AMISYNC_REGIONS")]
    pub regions: String,

    /// Type of AMI
    #[arg(short = 't', long = "type", value_enum, env = "AMISYNC_TYPE")]
    pub image_type: ImageType,

    /// Teleport version to update AMIs with
    #[arg(short = 'v', long = "version", env = "AMISYNC_VERSION")]
    pub release_version: String,

    /// Terraform documentation root, one directory per deployment mode
    #[arg(long, env = "AMISYNC_DOCS_DIR", default_value = DEFAULT_DOCS_DIR)]
    pub docs_dir: PathBuf,

    /// Manifest file name under the documentation root
    #[arg(long, env = "AMISYNC_MANIFEST", default_value = DEFAULT_MANIFEST)]
    pub manifest: String,

    /// Resolve AMIs and report changes without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Increase verbosity (--verbose, --verbose --verbose)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// AMI type as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageType {
    #[value(name = "oss", alias = "standard")]
    Oss,
    #[value(name = "ent", alias = "enterprise")]
    Ent,
    #[value(name = "ent-fips", alias = "enterprise-fips")]
    EntFips,
}

impl From<ImageType> for Flavor {
    fn from(t: ImageType) -> Self {
        match t {
            ImageType::Oss => Flavor::Oss,
            ImageType::Ent => Flavor::Ent,
            ImageType::EntFips => Flavor::EntFips,
        }
    }
}

impl Cli {
    /// Validated run configuration
    pub fn run_config(&self) -> amisync_core::Result<RunConfig> {
        RunConfig::new(
            &self.aws_account,
            RunConfig::split_regions(&self.regions),
            self.image_type.into(),
            &self.release_version,
        )
    }

    pub fn docs_layout(&self) -> DocsLayout {
        DocsLayout::new(&self.docs_dir).with_manifest(&self.manifest)
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Apply
        }
    }
}
