//! AMI manifest pass
//!
//! The manifest keeps one line per region and flavor revision, newest last:
//!
//! ```text
//! # us-east-1 v14.0.0 OSS: ami-0fedcba9876543210
//! # us-east-1 v14.1.0 OSS: ami-0123456789abcdef0
//! ```
//!
//! A run replaces the newest line for each resolved region and the run's
//! flavor. Older revisions and lines for other regions or flavors are left
//! byte-for-byte intact. The previous version and image ID on a replaced line
//! are not checked.

use crate::layout::DocsLayout;
use crate::report::{FileRewrite, ManifestRewrite, RegionLineUpdate};
use crate::rewriter::WriteMode;
use amisync_core::{DocFs, Error, Flavor, RegionImageMap, Result};
use regex::Regex;
use tracing::{debug, info};

/// Pattern for the manifest line of `region` and `flavor`, any version and ID.
///
/// Anchored per line; CRLF line endings are left in place.
pub fn line_pattern(region: &str, flavor: Flavor) -> Result<Regex> {
    let pattern = format!(
        r"(?mR)^# {} v(.*) {}: (ami-.*)$",
        regex::escape(region),
        regex::escape(flavor.friendly_label())
    );
    Regex::new(&pattern).map_err(|source| Error::Pattern { pattern, source })
}

/// Render a manifest line
pub fn manifest_line(region: &str, version: &str, flavor: Flavor, image_id: &str) -> String {
    format!(
        "# {} v{} {}: {}",
        region,
        version,
        flavor.friendly_label(),
        image_id
    )
}

/// Replace the newest line for every region in `images` with its new image ID.
///
/// A region with no line is left as is and reported with zero lines.
pub fn rewrite_text(
    text: &str,
    images: &RegionImageMap,
    flavor: Flavor,
    version: &str,
) -> Result<(String, Vec<RegionLineUpdate>)> {
    let mut rewritten = text.to_string();
    let mut updates = Vec::with_capacity(images.len());

    for (region, image_id) in images.iter() {
        let re = line_pattern(region, flavor)?;
        let mut lines = 0;
        let mut newest = None;
        for found in re.find_iter(&rewritten) {
            lines += 1;
            newest = Some(found.range());
        }

        match newest {
            Some(range) => {
                debug!("{}: {} line(s), replacing the newest", region, lines);
                let line = manifest_line(region, version, flavor, image_id);
                rewritten.replace_range(range, &line);
            }
            None => debug!("No {} line for {} in manifest", flavor.friendly_label(), region),
        }

        updates.push(RegionLineUpdate {
            region: region.to_string(),
            image_id: image_id.to_string(),
            lines,
        });
    }

    Ok((rewritten, updates))
}

/// Update the manifest file for every resolved region
pub fn update_manifest<F: DocFs + ?Sized>(
    fs: &F,
    layout: &DocsLayout,
    images: &RegionImageMap,
    flavor: Flavor,
    version: &str,
    mode: WriteMode,
) -> Result<ManifestRewrite> {
    let path = layout.manifest_path();
    let original = fs
        .read_to_string(&path)
        .map_err(|source| Error::ReadFile {
            path: path.clone(),
            source,
        })?;

    let (rewritten, regions) = rewrite_text(&original, images, flavor, version)?;
    for update in &regions {
        info!("[{}: {}] -> {}", flavor, update.region, update.image_id);
    }

    let changed = rewritten != original;
    let written = changed && mode.writes();
    if written {
        fs.write(&path, &rewritten)
            .map_err(|source| Error::WriteFile {
                path: path.clone(),
                source,
            })?;
    }

    Ok(ManifestRewrite {
        file: FileRewrite {
            path,
            replacements: regions.iter().filter(|r| r.lines > 0).count(),
            changed,
            written,
        },
        regions,
    })
}
