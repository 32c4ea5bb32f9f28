//! Display formatting for CLI output
//!
//! Progress notices go to stdout so a run can be audited afterwards.

use std::path::Path;

use console::style;
use k8split_core::{ResourceIdentity, SplitObserver, SplitSummary};

/// Prints one line per split event
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl SplitObserver for ConsoleProgress {
    fn on_split(&mut self, chunks: usize) {
        println!("split file into {} chunks", chunks);
    }

    fn on_written(&mut self, _index: usize, _identity: &ResourceIdentity, path: &Path) {
        println!("{} {}", style("wrote").green(), path.display());
    }

    fn on_duplicate(&mut self, _index: usize, identity: &ResourceIdentity) {
        println!(
            "{} skipping duplicate resource: {}",
            style("⚠").yellow(),
            identity
        );
    }
}

/// Announce the start of a run
pub fn print_start(input: &Path) {
    println!("splitting {}...", style(input.display()).cyan());
}

/// Print the closing summary line
pub fn print_summary(summary: &SplitSummary) {
    let mut details = Vec::with_capacity(2);
    if !summary.duplicates.is_empty() {
        details.push(format!("{} duplicate(s) skipped", summary.duplicates.len()));
    }
    if summary.blank > 0 {
        details.push(format!("{} blank document(s) skipped", summary.blank));
    }

    let details = if details.is_empty() {
        String::new()
    } else {
        format!(" ({})", details.join(", "))
    };

    println!(
        "{} Wrote {} file(s) from {} document(s){}",
        style("✓").green().bold(),
        summary.written.len(),
        summary.chunks,
        details
    );
}
