//! Diagnostic output. Everything goes to stderr: it is observational only
//! and never parsed by later logic.

use console::style;

use crate::entry::VersionEntry;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Progress record for one entry about to be tagged.
pub fn display_progress(entry: &VersionEntry) {
    eprintln!(
        "{} tagging {} {} at {}",
        style("→").cyan(),
        style(&entry.product).bold(),
        entry.version,
        entry.commit
    );
}
