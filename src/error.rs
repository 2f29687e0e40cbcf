use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for version-number updates
#[derive(Error, Debug)]
pub enum SetVersionError {
    #[error("Invalid number of arguments given ({0}). Only one argument (the new version number) is expected.")]
    ArgumentCount(usize),

    #[error("Version format error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("No match for pattern '{pattern}' in {}", .path.display())]
    PatternNotFound { path: PathBuf, pattern: String },

    #[error("I/O error on {}: {error}", .path.display())]
    Io { path: PathBuf, error: std::io::Error },
}

/// Convenience type alias for Results in set-version-number
pub type Result<T> = std::result::Result<T, SetVersionError>;

impl SetVersionError {
    /// Create a version format error with context
    pub fn version(msg: impl Into<String>) -> Self {
        SetVersionError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SetVersionError::Config(msg.into())
    }

    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        SetVersionError::Io {
            path: path.into(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SetVersionError::config("bad toml");
        assert_eq!(err.to_string(), "Configuration error: bad toml");
    }

    #[test]
    fn test_argument_count_message() {
        let msg = SetVersionError::ArgumentCount(2).to_string();
        assert!(msg.contains("Only one argument"));
        assert!(msg.contains("(2)"));
    }

    #[test]
    fn test_io_error_carries_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SetVersionError::io("src/api/resource.rc", io_err);
        let msg = err.to_string();
        assert!(msg.starts_with("I/O error on src/api/resource.rc"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_pattern_not_found_message() {
        let err = SetVersionError::PatternNotFound {
            path: PathBuf::from("include/loot/loot_version.h"),
            pattern: r"LIBLOOT_VERSION_MAJOR = \d+;".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("LIBLOOT_VERSION_MAJOR"));
        assert!(msg.contains("loot_version.h"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (SetVersionError::config("x"), "Configuration error"),
            (SetVersionError::version("x"), "Version format error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
