use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions found while rewriting target files.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateWarning {
    /// A substitution pattern matched nothing, so that part of the file was left as is
    PatternNotFound { path: PathBuf, pattern: String },
    /// Every pattern matched but the file already held the requested version
    AlreadyUpToDate { path: PathBuf },
}

impl fmt::Display for UpdateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateWarning::PatternNotFound { path, pattern } => {
                write!(
                    f,
                    "Pattern '{}' not found in {}; left unchanged",
                    pattern,
                    path.display()
                )
            }
            UpdateWarning::AlreadyUpToDate { path } => {
                write!(f, "{} already contains this version", path.display())
            }
        }
    }
}
