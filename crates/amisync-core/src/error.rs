//! Error types for amisync-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using amisync-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving images or rewriting documentation.
///
/// Every variant is fatal to the run; nothing here is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing run parameter
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Could not open a catalog session for a region
    #[error("Could not connect to the image catalog for {region}: {message}")]
    CatalogConnect { region: String, message: String },

    /// The image query itself failed
    #[error("Image query for {stub} in {region} failed: {message}")]
    CatalogQuery {
        region: String,
        stub: String,
        message: String,
    },

    /// No image matched the name stub
    #[error("Expected 1 image for {stub} in {region}, got 0")]
    NoImages { region: String, stub: String },

    /// More than one image matched the name stub
    #[error("Expected 1 image for {stub} in {region}, got {count}")]
    AmbiguousImages {
        region: String,
        stub: String,
        count: usize,
    },

    /// The single match carries no identifier
    #[error("Image {stub} in {region} is missing an ID")]
    MissingImageId { region: String, stub: String },

    /// The single match carries an ID that is not an AMI ID
    #[error("Image {stub} in {region} has malformed ID {image_id:?}")]
    MalformedImageId {
        region: String,
        stub: String,
        image_id: String,
    },

    /// A region was resolved twice
    #[error("Region {region} already has a resolved image")]
    DuplicateRegion { region: String },

    /// Documentation root could not be listed
    #[error("Could not read {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A deployment mode directory has no README
    #[error("Could not find README.md for deployment mode {mode:?} at {}", path.display())]
    MissingReadme { mode: String, path: PathBuf },

    /// A documentation file could not be read
    #[error("Could not read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A documentation file could not be written
    #[error("Could not update {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An internally built pattern failed to compile
    #[error("Invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a catalog connect error
    pub fn catalog_connect(region: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CatalogConnect {
            region: region.into(),
            message: message.into(),
        }
    }

    /// Create a catalog query error
    pub fn catalog_query(
        region: impl Into<String>,
        stub: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::CatalogQuery {
            region: region.into(),
            stub: stub.into(),
            message: message.into(),
        }
    }

    /// The region this error is about, if any
    pub fn region(&self) -> Option<&str> {
        match self {
            Self::CatalogConnect { region, .. }
            | Self::CatalogQuery { region, .. }
            | Self::NoImages { region, .. }
            | Self::AmbiguousImages { region, .. }
            | Self::MissingImageId { region, .. }
            | Self::MalformedImageId { region, .. }
            | Self::DuplicateRegion { region } => Some(region),
            _ => None,
        }
    }
}
