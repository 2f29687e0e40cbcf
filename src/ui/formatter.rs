//! Pure formatting functions for UI output.
//!
//! `format_*` functions build strings and are unit tested; `display_*`
//! functions print them.

use console::style;

use crate::updater::FileUpdate;
use crate::warning::UpdateWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display an update warning on stderr.
pub fn display_warning(warning: &UpdateWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One-line summary of what happened (or would happen) to a file.
pub fn format_file_report(update: &FileUpdate, written: bool) -> String {
    let verb = match (update.changed(), written) {
        (true, true) => "Updated",
        (true, false) => "Would update",
        (false, true) => "Rewrote unchanged",
        (false, false) => "Would leave unchanged",
    };
    let count = update.replacements();
    format!(
        "{} {} ({} replacement{})",
        verb,
        update.path.display(),
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Display the per-file report for an update run.
pub fn display_file_report(update: &FileUpdate, written: bool) {
    let line = format_file_report(update, written);
    if update.changed() {
        display_success(&line);
    } else {
        display_status(&line);
    }
}
