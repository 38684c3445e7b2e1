//! TOML-backed client settings.
//!
//! Settings live in `config.toml` inside the `.sympred` app directory. A missing
//! file yields defaults; `SYMPRED_BACKEND_URL` replaces the configured backend
//! base URL after loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::app_dirs;

/// Default filename used to store the client configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable overriding `backend.base_url`.
pub const BACKEND_URL_ENV: &str = "SYMPRED_BACKEND_URL";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_SYMPTOMS_PATH: &str = "/api/symptoms";
const DEFAULT_PREDICT_PATH: &str = "/api/predict";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_POSITIVE_LABEL: &str = "Diabetes";

/// Aggregate client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub prediction: PredictionSettings,
}

/// Where the prediction backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_symptoms_path")]
    pub symptoms_path: String,
    #[serde(default = "default_predict_path")]
    pub predict_path: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Read/write deadline; unset means a request may take as long as it takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_timeout_secs: Option<u64>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            symptoms_path: default_symptoms_path(),
            predict_path: default_predict_path(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: None,
        }
    }
}

impl BackendSettings {
    /// Absolute URL of the symptom catalog endpoint.
    pub fn symptoms_url(&self) -> Result<Url, ConfigError> {
        self.endpoint(&self.symptoms_path)
    }

    /// Absolute URL of the prediction endpoint.
    pub fn predict_url(&self) -> Result<Url, ConfigError> {
        self.endpoint(&self.predict_path)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }

    fn base(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(self.base_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            value: self.base_url.clone(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Endpoint paths resolve under the base URL's path, so a base of
    /// `https://host/app` serves `/api/predict` at `https://host/app/api/predict`.
    fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        let mut base = self.base()?;
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        base.join(path.trim_start_matches('/')).map_err(|source| ConfigError::InvalidUrl {
            value: path.to_string(),
            source,
        })
    }
}

/// How prediction labels are interpreted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionSettings {
    /// Label the backend uses for the disease outcome.
    #[serde(default = "default_positive_label")]
    pub positive_label: String,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            positive_label: default_positive_label(),
        }
    }
}

/// Errors raised while loading, validating or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config: {0}")]
    SerializeToml(#[from] toml::ser::Error),
    #[error("Invalid backend URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("Backend URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the app directory, returning defaults if missing.
///
/// The backend URL override from the environment is applied and the result is
/// validated before it is returned.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    let mut config = load_from_path(&path)?;
    if let Ok(url) = std::env::var(BACKEND_URL_ENV)
        && !url.trim().is_empty()
    {
        config.backend.base_url = url.trim().to_string();
    }
    config.validate()?;
    Ok(config)
}

/// Load configuration from a specific file, returning defaults if it does not exist.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

impl AppConfig {
    /// Check that both endpoint URLs can be formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend.symptoms_url()?;
        self.backend.predict_url()?;
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_symptoms_path() -> String {
    DEFAULT_SYMPTOMS_PATH.to_string()
}

fn default_predict_path() -> String {
    DEFAULT_PREDICT_PATH.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_positive_label() -> String {
    DEFAULT_POSITIVE_LABEL.to_string()
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = load_from_path(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.prediction.positive_label, "Diabetes");
        assert_eq!(config.backend.read_timeout(), None);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[backend]\nbase_url = \"http://example.test:8080\"\n").unwrap();
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.backend.base_url, "http://example.test:8080");
        assert_eq!(config.backend.predict_path, "/api/predict");
        assert_eq!(
            config.backend.predict_url().unwrap().as_str(),
            "http://example.test:8080/api/predict"
        );
    }

    #[test]
    fn endpoints_keep_base_path_prefix() {
        let mut settings = BackendSettings::default();
        settings.base_url = "https://host.test/app/".into();
        assert_eq!(
            settings.predict_url().unwrap().as_str(),
            "https://host.test/app/api/predict"
        );
        settings.base_url = "https://host.test/app".into();
        assert_eq!(
            settings.symptoms_url().unwrap().as_str(),
            "https://host.test/app/api/symptoms"
        );
        settings.base_url = "http://127.0.0.1:5000".into();
        assert_eq!(
            settings.predict_url().unwrap().as_str(),
            "http://127.0.0.1:5000/api/predict"
        );
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let mut config = AppConfig::default();
        config.backend.read_timeout_secs = Some(45);
        config.prediction.positive_label = "Positive".into();
        save_to_path(&config, &path).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn rejects_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[backend\n").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = AppConfig::default();
        config.backend.base_url = "ftp://example.test".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
        config.backend.base_url = "not a url".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
