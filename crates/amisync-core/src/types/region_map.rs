//! Region to image identifier mapping

use crate::error::{Error, Result};

/// Resolved image identifier per region, in resolution order.
///
/// Each region is populated exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionImageMap {
    entries: Vec<(String, String)>,
}

impl RegionImageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the image for `region`, refusing a second entry for the same region
    pub fn insert(&mut self, region: impl Into<String>, image_id: impl Into<String>) -> Result<()> {
        let region = region.into();
        if self.get(&region).is_some() {
            return Err(Error::DuplicateRegion { region });
        }
        self.entries.push((region, image_id.into()));
        Ok(())
    }

    pub fn get(&self, region: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(r, _)| r == region)
            .map(|(_, id)| id.as_str())
    }

    /// Iterate `(region, image_id)` pairs in resolution order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(r, id)| (r.as_str(), id.as_str()))
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(r, _)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the map holds exactly the given regions
    pub fn covers_exactly<S: AsRef<str>>(&self, regions: &[S]) -> bool {
        self.len() == regions.len() && regions.iter().all(|r| self.get(r.as_ref()).is_some())
    }
}
