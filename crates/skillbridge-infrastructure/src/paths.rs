//! Unified path management for SkillBridge files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/skillbridge/        # Config directory
//! └── config.toml               # Application configuration
//!
//! ~/.local/share/skillbridge/   # Data directory (overridable)
//! ├── user-storage.json         # Persisted session blob
//! └── logs/                     # Application logs
//!     └── skillbridge.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "skillbridge";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for skillbridge_core::SkillBridgeError {
    fn from(e: PathError) -> Self {
        skillbridge_core::SkillBridgeError::config(e.to_string())
    }
}

/// Resolves SkillBridge directories, optionally pinned to an explicit data
/// directory.
#[derive(Debug, Clone, Default)]
pub struct SkillBridgePaths {
    data_dir_override: Option<PathBuf>,
}

impl SkillBridgePaths {
    pub fn new(data_dir_override: Option<PathBuf>) -> Self {
        Self { data_dir_override }
    }

    /// Platform config directory, e.g. `~/.config/skillbridge/`.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Default location of `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Data directory: the override if set, otherwise e.g.
    /// `~/.local/share/skillbridge/`.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(dir) = &self.data_dir_override {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let paths = SkillBridgePaths::new(Some(PathBuf::from("/tmp/sb")));
        assert_eq!(paths.data_dir().unwrap(), PathBuf::from("/tmp/sb"));
        assert_eq!(paths.logs_dir().unwrap(), PathBuf::from("/tmp/sb/logs"));
    }

    #[test]
    fn test_config_file_name() {
        if let Ok(path) = SkillBridgePaths::config_file() {
            assert!(path.ends_with("skillbridge/config.toml"));
        }
    }
}
