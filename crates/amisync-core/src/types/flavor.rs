//! Image flavors and their naming conventions
//!
//! Every published AMI is named `<prefix>-<slug>-<version>`, except the FIPS
//! build which carries its marker after the version. [`Flavor::stub_parts`] is
//! the one place that knows about that divergence.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Name prefix shared by every published image
pub const IMAGE_NAME_PREFIX: &str = "gravitational-teleport-ami";

/// Image flavor enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Open source build
    Oss,
    /// Enterprise build
    Ent,
    /// Enterprise build with FIPS compliance mode
    EntFips,
}

impl Flavor {
    /// Every flavor, in display order
    pub const ALL: [Flavor; 3] = [Flavor::Oss, Flavor::Ent, Flavor::EntFips];

    /// Machine-readable slug, as accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Flavor::Oss => "oss",
            Flavor::Ent => "ent",
            Flavor::EntFips => "ent-fips",
        }
    }

    /// Label used in documentation headers and manifest lines
    pub fn friendly_label(&self) -> &'static str {
        match self {
            Flavor::Oss => "OSS",
            Flavor::Ent => "Enterprise",
            Flavor::EntFips => "Enterprise FIPS",
        }
    }

    /// The text around the version in this flavor's image name.
    ///
    /// Returns `(head, tail)` such that the name stub is `head + version + tail`.
    pub fn stub_parts(&self) -> (String, &'static str) {
        match self {
            Flavor::EntFips => (format!("{}-ent-", IMAGE_NAME_PREFIX), "-fips"),
            other => (format!("{}-{}-", IMAGE_NAME_PREFIX, other.slug()), ""),
        }
    }

    /// Exact image name published for `version`
    pub fn name_stub(&self, version: &str) -> String {
        let (head, tail) = self.stub_parts();
        format!("{}{}{}", head, version, tail)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Flavor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "oss" | "standard" => Ok(Flavor::Oss),
            "ent" | "enterprise" => Ok(Flavor::Ent),
            "ent-fips" | "enterprise-fips" => Ok(Flavor::EntFips),
            other => Err(Error::invalid_config(format!(
                "unknown image type {:?}, expected one of: oss, ent, ent-fips",
                other
            ))),
        }
    }
}
