//! Backend API configuration.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::protocol::SessionPolicy;

const APP_QUALIFIER: &str = "aero";
const APP_ORGANIZATION: &str = "skyhall";
const APP_NAME: &str = "skyhall";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "https://devgate.skyhall.aero/api/v1";
const DEFAULT_SESSION_COOKIE: &str = "session_id";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PROBE_INTERVAL_SECS: u64 = 10;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backend API configuration, loaded from an optional toml file and
/// overridable from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to.
    pub base_url: String,
    /// Name of the backend's session cookie.
    pub session_cookie_name: String,
    /// Request timeout applied once at transport construction.
    pub request_timeout_secs: u64,
    /// Interval between connectivity probes.
    pub probe_interval_secs: u64,
    /// Response-code policy.
    pub policy: SessionPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            probe_interval_secs: DEFAULT_PROBE_INTERVAL_SECS,
            policy: SessionPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `path`, or from the platform config
    /// directory when `path` is `None`. A missing file yields the defaults;
    /// a malformed file is logged and replaced by the defaults rather than
    /// aborting startup.
    ///
    /// # Errors
    /// Returns `ConfigError` only for filesystem failures other than
    /// "file not found".
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(explicit) => explicit.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        match toml::from_str(&content) {
            Ok(config) => {
                debug!(path = %path.display(), "config loaded");
                Ok(config)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::ConfigDirNotFound)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();

        assert_eq!(config.session_cookie_name, "session_id");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.policy.is_session_expired(21));
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let config = ApiConfig::load(Some(Path::new("/nonexistent/skyhall.toml"))).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"https://stage.example/api/v2\"").unwrap();

        let config = ApiConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.base_url, "https://stage.example/api/v2");
        assert_eq!(config.session_cookie_name, "session_id");
    }

    #[test]
    fn test_load_malformed_file_yields_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_url = [").unwrap();

        let config = ApiConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_policy_is_file_configurable() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[policy]\nsession_expired_min = 30\nsession_expired_max = 35\ninvalid_credentials_code = 40"
        )
        .unwrap();

        let config = ApiConfig::load(Some(file.path())).unwrap();

        assert!(config.policy.is_session_expired(33));
        assert!(!config.policy.is_session_expired(21));
        assert!(config.policy.is_invalid_credentials(40));
    }
}
