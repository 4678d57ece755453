//! Terminal output for the run summary

use console::style;
use std::path::Path;

/// What a run did to one documentation file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Updated,
    WouldUpdate,
    Unchanged,
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a section header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a resolved image as `[flavor: region] -> image id`
pub fn resolved(flavor: &str, region: &str, image_id: &str) {
    println!(
        "{} [{}: {}] -> {}",
        style("✓").green().bold(),
        style(flavor).cyan(),
        region,
        style(image_id).bold()
    );
}

/// Print the status line for a documentation file
pub fn file(path: &Path, status: FileStatus) {
    let path = path.display();
    match status {
        FileStatus::Updated => println!("{} Updated {}", style("✓").green().bold(), path),
        FileStatus::WouldUpdate => {
            println!("{} Would update {}", style("ℹ").blue().bold(), path)
        }
        FileStatus::Unchanged => println!("  {} {}", style(path).dim(), style("unchanged").dim()),
    }
}
