use crate::error::{Result, SetVersionError};
use std::fmt;

/// A three-part release version as supplied on the command line.
///
/// Keeps the original dotted string alongside the parsed components, since the
/// resource file embeds the string exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    raw: String,
}

impl Version {
    /// Create a version from its components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            raw: format!("{}.{}.{}", major, minor, patch),
        }
    }

    /// Parse a `major.minor.patch` string.
    ///
    /// The input must split on `.` into exactly three parts, and each part must
    /// be a plain non-negative integer. Pre-release and build suffixes are
    /// rejected because the target files only hold numeric components.
    pub fn parse(input: &str) -> Result<Self> {
        if input.split('.').count() != 3 {
            return Err(SetVersionError::version(format!(
                "'{}' is not a three-part semantic version (expected X.Y.Z)",
                input
            )));
        }

        let parsed = semver::Version::parse(input).map_err(|e| {
            SetVersionError::version(format!("'{}' is not a valid version: {}", input, e))
        })?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(SetVersionError::version(format!(
                "'{}' has a pre-release or build suffix; only X.Y.Z is supported",
                input
            )));
        }

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            raw: input.to_string(),
        })
    }

    /// The dotted form exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Components joined with `", "`, as used by resource `VERSION` directives.
    pub fn comma_separated(&self) -> String {
        format!("{}, {}, {}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Validates the positional arguments and parses the single version among them.
///
/// Fails with [`SetVersionError::ArgumentCount`] unless exactly one argument is
/// given.
pub fn parse_args(args: &[String]) -> Result<Version> {
    match args {
        [version] => Version::parse(version),
        _ => Err(SetVersionError::ArgumentCount(args.len())),
    }
}
