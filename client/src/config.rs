//! Client configuration loaded via OrthoConfig.
//!
//! Values come from `HOLIDAZE_*` environment variables and configuration
//! files; command-line arguments belong to the front end and are not read
//! here.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use mockable::Env;
use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::http::DEFAULT_BASE_URL;

const APP_DIR: &str = "holidaze";
const FALLBACK_DIR: &str = ".holidaze";

/// Configuration values that cannot be used as given.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `base_url` is not an absolute URL.
    #[error("invalid base URL {value:?}: {message}")]
    InvalidBaseUrl {
        /// Configured value.
        value: String,
        /// Parser message.
        message: String,
    },
    /// `session_dir` is not valid UTF-8.
    #[error("session directory {0:?} is not valid UTF-8")]
    NonUtf8SessionDir(PathBuf),
}

/// Settings for the Holidaze client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HOLIDAZE")]
pub struct ClientSettings {
    /// API root, defaulting to the production Holidaze API.
    pub base_url: Option<String>,
    /// Directory holding the persisted session record.
    pub session_dir: Option<PathBuf>,
    /// Emit JSON log lines instead of human-readable ones.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl ClientSettings {
    /// The configured API root, or [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Fails when the configured value does not parse as a URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Url::parse(raw).map_err(|err| ConfigError::InvalidBaseUrl {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// The configured session directory, or the per-user default from `env`.
    ///
    /// # Errors
    ///
    /// Fails when the configured directory is not valid UTF-8.
    pub fn session_dir<E: Env>(&self, env: &E) -> Result<Utf8PathBuf, ConfigError> {
        match &self.session_dir {
            Some(path) => Utf8PathBuf::from_path_buf(path.clone())
                .map_err(ConfigError::NonUtf8SessionDir),
            None => Ok(default_session_dir(env)),
        }
    }
}

/// `$XDG_CONFIG_HOME/holidaze`, else `$HOME/.config/holidaze`, else
/// `./.holidaze`.
#[must_use]
pub fn default_session_dir<E: Env>(env: &E) -> Utf8PathBuf {
    let non_empty = |key: &str| env.string(key).filter(|value| !value.trim().is_empty());
    if let Some(config_home) = non_empty("XDG_CONFIG_HOME") {
        return Utf8PathBuf::from(config_home).join(APP_DIR);
    }
    if let Some(home) = non_empty("HOME") {
        return Utf8PathBuf::from(home).join(".config").join(APP_DIR);
    }
    Utf8PathBuf::from(FALLBACK_DIR)
}
