use crate::traits::{ImageCatalog, ImageQuery};
use amisync_core::{Error, Flavor, Result};
use tracing::{debug, trace};

/// Prefix of every AMI ID
pub const AMI_ID_PREFIX: &str = "ami-";

/// Resolve the single public image published for `flavor` at `version`.
///
/// The region comes from the catalog session. Zero matches, more than one
/// match, or a match without a well-formed `ami-` ID are all errors; nothing
/// is picked silently and the ID is returned exactly as the catalog sent it.
pub async fn resolve(
    catalog: &dyn ImageCatalog,
    account: &str,
    flavor: Flavor,
    version: &str,
) -> Result<String> {
    let region = catalog.region();
    let stub = flavor.name_stub(version);
    debug!("Looking up {} owned by {} in {}", stub, account, region);

    let images = catalog
        .describe_images(&ImageQuery::public(account, &stub))
        .await?;
    trace!("{} returned {} image(s) for {}", region, images.len(), stub);

    let image = match images.as_slice() {
        [] => {
            return Err(Error::NoImages {
                region: region.to_string(),
                stub,
            })
        }
        [image] => image,
        many => {
            return Err(Error::AmbiguousImages {
                region: region.to_string(),
                stub,
                count: many.len(),
            })
        }
    };

    let image_id = match image.image_id.as_deref() {
        Some(id) if !id.trim().is_empty() => id,
        _ => {
            return Err(Error::MissingImageId {
                region: region.to_string(),
                stub,
            })
        }
    };

    // Stored verbatim; the manifest pass only recognises `ami-` IDs.
    let well_formed = image_id.starts_with(AMI_ID_PREFIX)
        && image_id.len() > AMI_ID_PREFIX.len()
        && !image_id.contains(char::is_whitespace);
    if !well_formed {
        return Err(Error::MalformedImageId {
            region: region.to_string(),
            stub,
            image_id: image_id.to_string(),
        });
    }

    Ok(image_id.to_string())
}
