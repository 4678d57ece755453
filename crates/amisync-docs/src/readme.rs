//! README version-marker pass
//!
//! Each deployment mode's README embeds an image name, e.g.
//! `TF_VAR_ami_name="gravitational-teleport-ami-oss-14.1.0"`. Markers have
//! the shape `<prefix>-<slug>-<version>`. The version is a dotted number,
//! optionally followed by `-` or `+` suffixes such as `-rc.1`, so a
//! pre-release marker is picked up again by the final release. An image name
//! suffix after the version (the `-fips` of `ent-14.1.0-fips`) stays put.

use crate::layout::DocsLayout;
use crate::report::FileRewrite;
use crate::rewriter::WriteMode;
use amisync_core::{DocFs, Error, Flavor, Result, IMAGE_NAME_PREFIX};
use regex::{Captures, Regex};
use std::io::ErrorKind;
use tracing::{debug, info};

/// Text in front of the version in a README marker for `flavor`
pub fn marker_head(flavor: Flavor) -> String {
    format!("{}-{}-", IMAGE_NAME_PREFIX, flavor.slug())
}

/// Pattern matching any version of `flavor`'s README marker.
///
/// Group 1 is everything after the head that reads as a version.
pub fn marker_pattern(flavor: Flavor) -> Result<Regex> {
    let pattern = format!(
        r"{}([0-9]+(?:\.[0-9]+)*(?:[-+][0-9A-Za-z]+(?:\.[0-9A-Za-z]+)*)*)",
        regex::escape(&marker_head(flavor))
    );
    Regex::new(&pattern).map_err(|source| Error::Pattern { pattern, source })
}

/// Image name suffix glued onto a matched version, if any
fn name_suffix(matched: &str) -> &'static str {
    Flavor::ALL
        .iter()
        .map(|flavor| flavor.stub_parts().1)
        .find(|tail| !tail.is_empty() && matched.ends_with(*tail))
        .unwrap_or("")
}

/// Rewrite every marker for `flavor` in `text` to `version`.
///
/// Returns the new text and the number of markers replaced.
pub fn rewrite_text(text: &str, flavor: Flavor, version: &str) -> Result<(String, usize)> {
    let re = marker_pattern(flavor)?;
    let head = marker_head(flavor);

    let mut replaced = 0;
    let rewritten = re.replace_all(text, |caps: &Captures| {
        replaced += 1;
        format!("{}{}{}", head, version, name_suffix(&caps[1]))
    });
    Ok((rewritten.into_owned(), replaced))
}

/// Deployment mode directories directly under the documentation root.
///
/// Hidden entries and plain files are skipped.
pub fn discover_modes<F: DocFs + ?Sized>(fs: &F, layout: &DocsLayout) -> Result<Vec<String>> {
    let root = layout.root();
    let entries = fs.list_dir(root).map_err(|source| Error::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut modes = Vec::new();
    for entry in entries {
        if !entry.is_dir || entry.is_hidden() {
            debug!("Skipping {}", entry.name);
            continue;
        }
        modes.push(entry.name);
    }
    Ok(modes)
}

/// Update the version marker in every deployment mode's README
pub fn update_readmes<F: DocFs + ?Sized>(
    fs: &F,
    layout: &DocsLayout,
    flavor: Flavor,
    version: &str,
    mode: WriteMode,
) -> Result<Vec<FileRewrite>> {
    let mut results = Vec::new();

    for deploy_mode in discover_modes(fs, layout)? {
        info!("Updating version in README for {}", deploy_mode);
        let path = layout.readme_path(&deploy_mode);

        let original = fs.read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                Error::MissingReadme {
                    mode: deploy_mode.clone(),
                    path: path.clone(),
                }
            } else {
                Error::ReadFile {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let (rewritten, replacements) = rewrite_text(&original, flavor, version)?;
        let changed = rewritten != original;
        let written = changed && mode.writes();
        if written {
            fs.write(&path, &rewritten)
                .map_err(|source| Error::WriteFile {
                    path: path.clone(),
                    source,
                })?;
        }
        debug!(
            "{}: {} marker(s), changed={}, written={}",
            path.display(),
            replacements,
            changed,
            written
        );

        results.push(FileRewrite {
            path,
            replacements,
            changed,
            written,
        });
    }

    Ok(results)
}
