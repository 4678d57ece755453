//! Helpers for driving the AWS CLI

use crate::traits::{ImageQuery, ImageRecord};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// Locate a CLI tool on `PATH`
pub fn find_cli(cli_name: &str) -> Option<PathBuf> {
    match which::which(cli_name) {
        Ok(path) => {
            debug!("Found {} at: {}", cli_name, path.display());
            Some(path)
        }
        Err(_) => None,
    }
}

/// Arguments for `aws ec2 describe-images` scoped to `region`
pub fn describe_images_args(region: &str, query: &ImageQuery) -> Vec<String> {
    let mut args = vec![
        "ec2".to_string(),
        "describe-images".to_string(),
        "--region".to_string(),
        region.to_string(),
        "--owners".to_string(),
        query.owner.clone(),
        "--filters".to_string(),
        format!("Name=name,Values={}", query.name),
    ];
    if query.public_only {
        args.push("Name=is-public,Values=true".to_string());
    }
    args.extend(["--output".to_string(), "json".to_string()]);
    args
}

#[derive(Debug, Deserialize)]
struct DescribeImagesOutput {
    #[serde(rename = "Images", default)]
    images: Vec<ImageRecord>,
}

/// Parse the JSON document printed by `aws ec2 describe-images`
pub fn parse_describe_images(output: &[u8]) -> serde_json::Result<Vec<ImageRecord>> {
    let parsed: DescribeImagesOutput = serde_json::from_slice(output)?;
    Ok(parsed.images)
}

/// First non-empty line of a CLI's stderr, for error messages
pub fn first_stderr_line(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("no error output")
        .to_string()
}
