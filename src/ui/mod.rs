//! User interface module - reporting of update progress and results.
//!
//! - `formatter` - Pure formatting functions
//! - This module - [`Reporter`], which honors `--quiet`

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_file_report, display_status, display_success, display_warning,
    format_file_report,
};

use crate::updater::UpdateOutcome;

/// Routes progress output, dropping everything but errors when quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Reporter { quiet }
    }

    pub fn status(&self, message: &str) {
        if !self.quiet {
            display_status(message);
        }
    }

    /// Print per-file results, then warnings, then a closing line.
    pub fn outcome(&self, outcome: &UpdateOutcome) {
        if self.quiet {
            return;
        }

        for file in &outcome.files {
            display_file_report(file, outcome.written);
        }
        for warning in outcome.warnings() {
            display_warning(&warning);
        }

        if outcome.written {
            display_success(&format!("Version set to {}", outcome.version));
        } else {
            display_status(&format!(
                "Dry run: no files written for version {}",
                outcome.version
            ));
        }
    }
}
