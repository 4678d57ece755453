//! Image catalog trait definitions
//!
//! The resolver only needs one capability from the cloud: list the images
//! matching a name, owned by an account, in one region. [`ImageCatalog`] is
//! that capability; [`CatalogConnector`] opens one per region.

use amisync_core::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Filters for a single image listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageQuery {
    /// Owning account ID
    pub owner: String,
    /// Exact image name
    pub name: String,
    /// Only return public images
    pub public_only: bool,
}

impl ImageQuery {
    /// Query for public images named `name` owned by `owner`
    pub fn public(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            public_only: true,
        }
    }
}

/// Image record as returned by the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    #[serde(rename = "ImageId", default)]
    pub image_id: Option<String>,

    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

impl ImageRecord {
    pub fn new(image_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            image_id: Some(image_id.into()),
            name: Some(name.into()),
        }
    }
}

/// Region-scoped image listing
#[async_trait]
pub trait ImageCatalog: Send + Sync {
    /// Region this catalog session is bound to
    fn region(&self) -> &str;

    /// List images matching `query` in this region
    async fn describe_images(&self, query: &ImageQuery) -> Result<Vec<ImageRecord>>;
}

/// Opens a region-scoped [`ImageCatalog`]
pub trait CatalogConnector: Send + Sync {
    fn connect(&self, region: &str) -> Result<Box<dyn ImageCatalog>>;
}
