//! Optional on-disk configuration.
//!
//! Configuration is ambient, not part of the bootstrap contract: a missing
//! file is normal, and the binary tolerates (but logs) a broken one rather
//! than refusing to start the worker.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
pub struct StokerConfig {
    pub worker: Option<WorkerConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkerConfig {
    /// Seated ahead of the executable-relative root when resolving the
    /// sibling module tree; the default roots remain as fallbacks.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// Directory log files are written to, tried before the default
    /// candidates.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl StokerConfig {
    /// Loads `~/.stoker/config.toml` if it exists.
    ///
    /// Returns `Ok(None)` when no config file is present; that is the normal
    /// case, not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        load_file(&path).map(Some)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn load_file(path: &Path) -> Result<StokerConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!("Failed to read config at {:?}: {}", path, err);
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!("Failed to parse config at {:?}: {}", path, err);
            Err(ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".stoker").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, load_file};
    use std::fs;

    #[test]
    fn parses_worker_root_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[worker]\nroot = \"/opt/stoker\"\n").unwrap();

        let config = load_file(&path).unwrap();
        let root = config.worker.unwrap().root.unwrap();
        assert_eq!(root, std::path::Path::new("/opt/stoker"));
    }

    #[test]
    fn parses_log_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[logging]\ndir = \"/var/log/stoker\"\n").unwrap();

        let config = load_file(&path).unwrap();
        let log_dir = config.logging.unwrap().dir.unwrap();
        assert_eq!(log_dir, std::path::Path::new("/var/log/stoker"));
    }

    #[test]
    fn empty_file_is_a_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = load_file(&path).unwrap();
        assert!(config.worker.is_none());
    }

    #[test]
    fn malformed_toml_is_a_parse_error_carrying_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[worker\n").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
