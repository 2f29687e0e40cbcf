//! The two files a release edits and the substitutions applied to each.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::substitution::Substitution;
use crate::version::Version;

/// C++ header declaring the numeric version constants.
pub const HEADER_PATH: &str = "include/loot/loot_version.h";

/// Windows resource script embedding the version.
pub const RESOURCE_PATH: &str = "src/api/resource.rc";

/// A file under the project root together with the edits it receives.
#[derive(Debug, Clone)]
pub struct TargetFile {
    pub relative_path: PathBuf,
    pub substitutions: Vec<Substitution>,
}

impl TargetFile {
    /// Resolve the target against a project root.
    pub fn path_in(&self, root: &Path) -> PathBuf {
        root.join(&self.relative_path)
    }
}

/// Header edits: one `LIBLOOT_VERSION_<PART> = N;` declaration per component.
pub fn header_target(version: &Version) -> Result<TargetFile> {
    let parts = [
        ("MAJOR", version.major),
        ("MINOR", version.minor),
        ("PATCH", version.patch),
    ];

    let substitutions = parts
        .iter()
        .map(|(name, value)| {
            Substitution::new(
                &format!(r"LIBLOOT_VERSION_{} = \d+;", name),
                format!("LIBLOOT_VERSION_{} = {};", name, value),
            )
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TargetFile {
        relative_path: PathBuf::from(HEADER_PATH),
        substitutions,
    })
}

/// Resource edits: the comma-separated `VERSION` directive and the quoted
/// `...Version", "X.Y.Z"` string value.
pub fn resource_target(version: &Version) -> Result<TargetFile> {
    let substitutions = vec![
        Substitution::new(
            r"VERSION \d+, \d+, \d+",
            format!("VERSION {}", version.comma_separated()),
        )?,
        Substitution::new(
            r#"Version", "\d+\.\d+\.\d+""#,
            format!(r#"Version", "{}""#, version.as_str()),
        )?,
    ];

    Ok(TargetFile {
        relative_path: PathBuf::from(RESOURCE_PATH),
        substitutions,
    })
}

/// All targets, in the order they are edited.
pub fn release_targets(version: &Version) -> Result<Vec<TargetFile>> {
    Ok(vec![header_target(version)?, resource_target(version)?])
}
