//! Loads [`AppConfig`] from `config.toml`.

use std::path::{Path, PathBuf};

use skillbridge_core::config::AppConfig;
use skillbridge_core::error::{Result, SkillBridgeError};

use crate::paths::SkillBridgePaths;
use crate::storage::AtomicFile;

/// Where a loaded config came from.
///
/// Config is read before logging is set up, so callers log this once the
/// subscriber is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file.
    File(PathBuf),
    /// Nothing at this path; built-in defaults apply.
    Defaults(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::File(path) | ConfigSource::Defaults(path) => path,
        }
    }
}

pub struct ConfigService;

impl ConfigService {
    /// Loads the config at `path`, or the default location when `None`.
    ///
    /// A missing file yields defaults; a malformed one is a `Config` error.
    pub fn load(path: Option<&Path>) -> Result<(AppConfig, ConfigSource)> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => SkillBridgePaths::config_file()?,
        };
        Self::load_from(path)
    }

    fn load_from(path: PathBuf) -> Result<(AppConfig, ConfigSource)> {
        let file = AtomicFile::new(path);
        match file.read()? {
            Some(content) => {
                let config = toml::from_str(&content).map_err(|e| {
                    SkillBridgeError::config(format!("{}: {}", file.path().display(), e))
                })?;
                Ok((config, ConfigSource::File(file.path().to_path_buf())))
            }
            None => Ok((
                AppConfig::default(),
                ConfigSource::Defaults(file.path().to_path_buf()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let (config, source) = ConfigService::load(Some(&path)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(source, ConfigSource::Defaults(path));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[storage]\nsession_key = \"learner\"\n\n[logging]\nlevel = \"debug\"\nfile = true\n",
        )
        .unwrap();

        let (config, source) = ConfigService::load(Some(&path)).unwrap();
        assert_eq!(config.storage.session_key, "learner");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file);
        assert_eq!(config.auth.simulated_latency_ms, 0);
        assert_eq!(source.path(), path.as_path());
        assert!(matches!(source, ConfigSource::File(_)));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[logging\nlevel = ").unwrap();

        let err = ConfigService::load(Some(&path)).unwrap_err();
        assert!(matches!(err, SkillBridgeError::Config(_)));
    }
}
