//! Main workflow orchestration logic
//!
//! Keeps the update flow out of main.rs so it can be driven programmatically
//! without depending on clap.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config;
use crate::ui::Reporter;
use crate::updater::{self, UpdateOptions};
use crate::version;

/// Arguments for the update workflow
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateWorkflowArgs {
    /// Positional arguments; exactly one version is expected
    pub versions: Vec<String>,

    /// Project root the target paths are resolved against
    pub root: PathBuf,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Fail if any pattern matches nothing
    pub strict: bool,

    /// Preview mode - compute rewrites without writing
    pub dry_run: bool,

    /// Suppress everything but errors
    pub quiet: bool,
}

impl Default for UpdateWorkflowArgs {
    fn default() -> Self {
        UpdateWorkflowArgs {
            versions: Vec::new(),
            root: PathBuf::from("."),
            config_path: None,
            strict: false,
            dry_run: false,
            quiet: false,
        }
    }
}

/// Result of a successful update workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The version that was set
    pub version: String,

    /// Files whose content changed
    pub changed_files: Vec<PathBuf>,

    /// Whether files were written (false for dry runs)
    pub written: bool,

    /// Number of warnings reported
    pub warnings: usize,
}

/// Main update workflow
///
/// 1. Validate the version argument (nothing is read before this succeeds)
/// 2. Load configuration
/// 3. Rewrite the header and resource files
/// 4. Report per-file results and warnings
pub fn run_update_workflow(args: UpdateWorkflowArgs) -> Result<WorkflowResult> {
    let version = version::parse_args(&args.versions)?;

    let config = config::load_config(args.config_path.as_deref(), &args.root)
        .context("Failed to load configuration")?;

    let options = UpdateOptions {
        strict: args.strict || config.behavior.strict,
        dry_run: args.dry_run,
    };

    let reporter = Reporter::new(args.quiet);
    reporter.status(&format!(
        "Setting version {} in {}",
        version,
        args.root.display()
    ));

    let outcome = updater::update_version(&args.root, &version, &options)?;
    reporter.outcome(&outcome);

    Ok(WorkflowResult {
        version: version.to_string(),
        changed_files: outcome
            .files
            .iter()
            .filter(|f| f.changed())
            .map(|f| f.path.clone())
            .collect(),
        written: outcome.written,
        warnings: outcome.warnings().len(),
    })
}
