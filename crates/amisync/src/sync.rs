//! Resolve-then-rewrite workflow

use crate::cli::Cli;
use crate::output::{self, FileStatus};
use amisync_aws::{resolve_all, AwsCliConnector, CatalogConnector};
use amisync_core::{DocFs, LocalFs, RegionImageMap, RunConfig};
use amisync_docs::{DocRewriter, DocsLayout, FileRewrite, RewriteReport, WriteMode};
use anyhow::{Context, Result};
use tracing::debug;

/// Run the workflow for parsed command-line arguments
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.run_config().context("Invalid arguments")?;
    let layout = cli.docs_layout();
    let mode = cli.write_mode();

    let connector = AwsCliConnector::detect()?;
    debug!("Using AWS CLI at {}", connector.program().display());

    let (images, report) = execute(&connector, &LocalFs, &config, &layout, mode).await?;

    if !cli.quiet {
        print_summary(&config, &layout, &images, &report, mode);
    }
    Ok(())
}

/// Resolve every region, then rewrite the documentation.
///
/// Nothing is written unless every region resolved.
pub async fn execute<F: DocFs + ?Sized>(
    connector: &dyn CatalogConnector,
    fs: &F,
    config: &RunConfig,
    layout: &DocsLayout,
    mode: WriteMode,
) -> Result<(RegionImageMap, RewriteReport)> {
    let images = resolve_all(connector, config).await.with_context(|| {
        format!(
            "Failed to resolve {} AMIs for version {}",
            config.flavor(),
            config.version()
        )
    })?;

    let report = DocRewriter::new(fs, layout)
        .with_mode(mode)
        .rewrite(config, &images)
        .with_context(|| {
            format!(
                "Failed to update documentation under {}",
                layout.root().display()
            )
        })?;

    Ok((images, report))
}

fn print_summary(
    config: &RunConfig,
    layout: &DocsLayout,
    images: &RegionImageMap,
    report: &RewriteReport,
    mode: WriteMode,
) {
    output::header(&format!(
        "{} AMIs for {}",
        config.flavor().friendly_label(),
        config.version()
    ));
    for (region, image_id) in images.iter() {
        output::resolved(config.flavor().slug(), region, image_id);
    }

    output::header("Documentation");
    for file in report.readmes.iter().chain([&report.manifest.file]) {
        output::file(&file.path, file_status(file, mode));
    }
    for region in report.unmatched_regions() {
        output::warning(&format!(
            "No {} line for {} in {}",
            config.flavor().friendly_label(),
            region,
            layout.manifest_path().display()
        ));
    }

    if !mode.writes() {
        output::info("Dry run: no files were written");
    }
}

fn file_status(file: &FileRewrite, mode: WriteMode) -> FileStatus {
    if file.written {
        FileStatus::Updated
    } else if file.changed && !mode.writes() {
        FileStatus::WouldUpdate
    } else {
        FileStatus::Unchanged
    }
}
