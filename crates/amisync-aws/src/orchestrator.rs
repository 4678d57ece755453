//! Per-region resolution driver

use crate::resolver;
use crate::traits::CatalogConnector;
use amisync_core::{RegionImageMap, Result, RunConfig};
use tracing::info;

/// Resolve the image for every configured region, one region at a time.
///
/// Regions are visited in configuration order. The first failure aborts the
/// whole run; on success the map holds exactly one entry per region.
pub async fn resolve_all(
    connector: &dyn CatalogConnector,
    config: &RunConfig,
) -> Result<RegionImageMap> {
    let mut images = RegionImageMap::new();

    for region in config.regions() {
        let catalog = connector.connect(region)?;
        let image_id = resolver::resolve(
            catalog.as_ref(),
            config.account(),
            config.flavor(),
            config.version(),
        )
        .await?;

        info!("[{}: {}] -> {}", config.flavor(), region, image_id);
        images.insert(region.clone(), image_id)?;
    }

    debug_assert!(images.covers_exactly(config.regions()));
    Ok(images)
}
