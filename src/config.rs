use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetVersionError};

/// File name searched for in the project root and the user config directory.
pub const CONFIG_FILE_NAME: &str = "set-version.toml";

/// Represents the complete configuration for set-version-number.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Treat a pattern that matches nothing as an error
    #[serde(default)]
    pub strict: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `set-version.toml` in the project root
/// 3. `set-version.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    match locate_config(config_path, root) {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

/// Returns the first config file that applies, if any.
///
/// An explicit path is returned even if it does not exist, so that reading it
/// reports the problem.
pub fn locate_config(config_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let project_config = root.join(CONFIG_FILE_NAME);
    if project_config.exists() {
        return Some(project_config);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

fn load_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| SetVersionError::io(path, e))?;
    toml::from_str(&config_str)
        .map_err(|e| SetVersionError::config(format!("{}: {}", path.display(), e)))
}
