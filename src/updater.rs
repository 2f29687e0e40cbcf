//! Reads target files, applies their substitutions in memory, and writes them back.
//!
//! Every target is planned before any is written, so a read failure or a
//! strict-mode miss leaves all files untouched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetVersionError};
use crate::substitution::Substitution;
use crate::targets::{self, TargetFile};
use crate::version::Version;
use crate::warning::UpdateWarning;

/// Knobs for a single update run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Fail when any substitution matches nothing
    pub strict: bool,
    /// Compute rewrites but do not write them
    pub dry_run: bool,
}

/// How many replacements one substitution made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionReport {
    pub pattern: String,
    pub replacements: usize,
}

/// The in-memory rewrite of one file.
#[derive(Debug, Clone)]
pub struct FileUpdate {
    pub path: PathBuf,
    pub original: String,
    pub updated: String,
    pub substitutions: Vec<SubstitutionReport>,
}

impl FileUpdate {
    pub fn changed(&self) -> bool {
        self.original != self.updated
    }

    pub fn replacements(&self) -> usize {
        self.substitutions.iter().map(|s| s.replacements).sum()
    }

    pub fn warnings(&self) -> Vec<UpdateWarning> {
        let mut warnings: Vec<UpdateWarning> = self
            .substitutions
            .iter()
            .filter(|s| s.replacements == 0)
            .map(|s| UpdateWarning::PatternNotFound {
                path: self.path.clone(),
                pattern: s.pattern.clone(),
            })
            .collect();

        if warnings.is_empty() && !self.changed() {
            warnings.push(UpdateWarning::AlreadyUpToDate {
                path: self.path.clone(),
            });
        }
        warnings
    }

    /// Write the rewritten content back over the original file.
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, &self.updated).map_err(|e| SetVersionError::io(&self.path, e))
    }
}

/// Result of updating every release target.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub version: Version,
    pub files: Vec<FileUpdate>,
    pub written: bool,
}

impl UpdateOutcome {
    pub fn warnings(&self) -> Vec<UpdateWarning> {
        self.files.iter().flat_map(|f| f.warnings()).collect()
    }
}

/// Read `path` and apply `substitutions` in order, without writing.
pub fn plan_file(path: &Path, substitutions: &[Substitution]) -> Result<FileUpdate> {
    let original = fs::read_to_string(path).map_err(|e| SetVersionError::io(path, e))?;

    let mut updated = original.clone();
    let mut reports = Vec::with_capacity(substitutions.len());
    for substitution in substitutions {
        let (next, replacements) = substitution.apply(&updated);
        updated = next;
        reports.push(SubstitutionReport {
            pattern: substitution.pattern().to_string(),
            replacements,
        });
    }

    Ok(FileUpdate {
        path: path.to_path_buf(),
        original,
        updated,
        substitutions: reports,
    })
}

/// Read, rewrite, and write back a single file.
pub fn replace_in_file(path: &Path, substitutions: &[Substitution]) -> Result<FileUpdate> {
    let update = plan_file(path, substitutions)?;
    update.write()?;
    Ok(update)
}

/// Plan every target under `root`, enforcing strict mode before anything is written.
pub fn plan_targets(
    root: &Path,
    targets: &[TargetFile],
    options: &UpdateOptions,
) -> Result<Vec<FileUpdate>> {
    let files = targets
        .iter()
        .map(|target| plan_file(&target.path_in(root), &target.substitutions))
        .collect::<Result<Vec<_>>>()?;

    if options.strict {
        let missed = files.iter().find_map(|file| {
            file.substitutions
                .iter()
                .find(|s| s.replacements == 0)
                .map(|s| (file.path.clone(), s.pattern.clone()))
        });
        if let Some((path, pattern)) = missed {
            return Err(SetVersionError::PatternNotFound { path, pattern });
        }
    }

    Ok(files)
}

/// Set `version` in the header and resource files under `root`.
///
/// Files are rewritten in full even when nothing matched. If writing the
/// resource file fails after the header was written, the header edit stays.
pub fn update_version(
    root: &Path,
    version: &Version,
    options: &UpdateOptions,
) -> Result<UpdateOutcome> {
    let targets = targets::release_targets(version)?;
    let files = plan_targets(root, &targets, options)?;

    if !options.dry_run {
        for file in &files {
            file.write()?;
        }
    }

    Ok(UpdateOutcome {
        version: version.clone(),
        files,
        written: !options.dry_run,
    })
}
