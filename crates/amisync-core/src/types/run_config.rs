//! Validated run configuration

use crate::error::{Error, Result};
use crate::types::Flavor;

/// Parameters of one run, validated once and passed explicitly to each step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    account: String,
    regions: Vec<String>,
    flavor: Flavor,
    version: String,
}

impl RunConfig {
    /// Build a configuration, rejecting blank values and duplicate regions.
    ///
    /// Regions are trimmed; their order is kept.
    pub fn new<I, S>(
        account: impl Into<String>,
        regions: I,
        flavor: Flavor,
        version: impl Into<String>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let account = account.into().trim().to_string();
        if account.is_empty() {
            return Err(Error::invalid_config("AWS account ID is required"));
        }
        if account.chars().any(char::is_whitespace) {
            return Err(Error::invalid_config(format!(
                "AWS account ID {:?} must not contain whitespace",
                account
            )));
        }

        let mut validated: Vec<String> = Vec::new();
        for region in regions {
            let region = region.as_ref().trim();
            if region.is_empty() {
                return Err(Error::invalid_config("region list contains an empty entry"));
            }
            if region.chars().any(char::is_whitespace) {
                return Err(Error::invalid_config(format!(
                    "region {:?} must not contain whitespace",
                    region
                )));
            }
            if validated.iter().any(|r| r == region) {
                return Err(Error::invalid_config(format!(
                    "region {} is listed more than once",
                    region
                )));
            }
            validated.push(region.to_string());
        }
        if validated.is_empty() {
            return Err(Error::invalid_config("at least one region is required"));
        }

        let version = version.into().trim().to_string();
        if version.is_empty() {
            return Err(Error::invalid_config("version is required"));
        }
        if version.chars().any(char::is_whitespace) {
            return Err(Error::invalid_config(format!(
                "version {:?} must not contain whitespace",
                version
            )));
        }

        Ok(Self {
            account,
            regions: validated,
            flavor,
            version,
        })
    }

    /// Split a comma-separated region list as given on the command line
    pub fn split_regions(list: &str) -> Vec<&str> {
        list.split(',').collect()
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Image name searched for in every region
    pub fn name_stub(&self) -> String {
        self.flavor.name_stub(&self.version)
    }
}
