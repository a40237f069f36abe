//! Wiring of the command-line application from loaded settings.

use std::sync::Arc;

use mockable::{Clock, Env};
use thiserror::Error;
use tracing::debug;

use super::CliApp;
use crate::config::{ClientSettings, ConfigError};
use crate::domain::SessionStore;
use crate::domain::ports::SessionStorageError;
use crate::outbound::http::{HolidazeHttpClient, HttpClientBuildError};
use crate::outbound::storage::FileSessionStorage;

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum StartupError {
    /// A configured value is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The session directory could not be created or opened.
    #[error("failed to open the session directory: {0}")]
    Storage(#[from] SessionStorageError),
    /// The HTTP client could not be built.
    #[error(transparent)]
    Client(#[from] HttpClientBuildError),
}

/// Build the [`CliApp`] described by `settings`, with the stored session
/// already restored.
///
/// `env` supplies the default session directory when none is configured.
///
/// # Examples
///
/// ```rust,no_run
/// use std::ffi::OsString;
/// use std::sync::Arc;
///
/// use holidaze::config::ClientSettings;
/// use holidaze::inbound::cli::build_app;
/// use mockable::{DefaultClock, DefaultEnv};
/// use ortho_config::OrthoConfig;
///
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ClientSettings::load_from_iter([OsString::from("holidaze")])?;
/// let app = build_app(&settings, &DefaultEnv::new(), Arc::new(DefaultClock))?;
/// # drop(app);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails on an invalid base URL or session directory, or when the HTTP
/// client cannot be built.
pub fn build_app<E: Env>(
    settings: &ClientSettings,
    env: &E,
    clock: Arc<dyn Clock>,
) -> Result<CliApp<HolidazeHttpClient>, StartupError> {
    let base_url = settings.base_url()?;
    let session_dir = settings.session_dir(env)?;
    debug!(%base_url, %session_dir, "configuration loaded");

    let storage = FileSessionStorage::open(&session_dir)?;
    let session = Arc::new(SessionStore::new(Arc::new(storage)));
    let restored = session.restore();
    debug!(logged_in = restored.is_some(), "startup session state");

    let gateway = Arc::new(HolidazeHttpClient::new(base_url)?);
    Ok(CliApp::new(gateway, session, clock))
}
