//! Mock cloud catalog for testing
//!
//! Holds images per region and records every connect and query call so tests
//! can assert on the order and scope of the lookups.

use amisync_aws::{CatalogConnector, ImageCatalog, ImageQuery, ImageRecord};
use amisync_core::{Error, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock image published in a region
#[derive(Clone, Debug)]
pub struct MockImage {
    pub id: Option<String>,
    pub name: String,
    pub owner: String,
    pub public: bool,
}

impl MockImage {
    pub fn new(id: &str, name: &str, owner: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            name: name.to_string(),
            owner: owner.to_string(),
            public: true,
        }
    }

    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }
}

#[derive(Default)]
struct CloudState {
    images: HashMap<String, Vec<MockImage>>,
    failing_regions: HashSet<String>,
    api_calls: Vec<String>,
}

/// Mock AWS cloud shared by every catalog it opens
#[derive(Clone, Default)]
pub struct MockCloud {
    state: Arc<Mutex<CloudState>>,
}

impl MockCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an image in a region
    pub fn add_image(&self, region: &str, image: MockImage) {
        self.state
            .lock()
            .unwrap()
            .images
            .entry(region.to_string())
            .or_default()
            .push(image);
    }

    /// Make every query in `region` fail
    pub fn fail_region(&self, region: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_regions
            .insert(region.to_string());
    }

    /// Calls recorded so far, e.g. `connect(us-east-1)`
    pub fn api_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().api_calls.clone()
    }

    fn record(&self, call: String) {
        self.state.lock().unwrap().api_calls.push(call);
    }
}

impl CatalogConnector for MockCloud {
    fn connect(&self, region: &str) -> Result<Box<dyn ImageCatalog>> {
        self.record(format!("connect({})", region));
        Ok(Box::new(MockCatalog {
            cloud: self.clone(),
            region: region.to_string(),
        }))
    }
}

/// Region-scoped view of a [`MockCloud`]
pub struct MockCatalog {
    cloud: MockCloud,
    region: String,
}

#[async_trait]
impl ImageCatalog for MockCatalog {
    fn region(&self) -> &str {
        &self.region
    }

    async fn describe_images(&self, query: &ImageQuery) -> Result<Vec<ImageRecord>> {
        self.cloud.record(format!(
            "describe_images(region={}, owner={}, name={})",
            self.region, query.owner, query.name
        ));

        let state = self.cloud.state.lock().unwrap();
        if state.failing_regions.contains(&self.region) {
            return Err(Error::catalog_query(
                &self.region,
                &query.name,
                "simulated outage",
            ));
        }

        Ok(state
            .images
            .get(&self.region)
            .map(|images| {
                images
                    .iter()
                    .filter(|img| img.name == query.name)
                    .filter(|img| img.owner == query.owner)
                    .filter(|img| img.public || !query.public_only)
                    .map(|img| ImageRecord {
                        image_id: img.id.clone(),
                        name: Some(img.name.clone()),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}
