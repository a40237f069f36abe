//! Session persistence in a JSON file under a capability-scoped directory.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::Session;
use crate::domain::ports::{SessionStorage, SessionStorageError};

/// File name of the persisted session record.
pub const SESSION_FILE: &str = "user.json";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Stores the session as `user.json` inside one directory.
///
/// Writes go to a temporary file that is renamed over the record, so a
/// crash never leaves a half-written session behind.
#[derive(Debug)]
pub struct FileSessionStorage {
    dir: Dir,
    path: Utf8PathBuf,
}

impl FileSessionStorage {
    /// Open `path`, creating it and its parents when missing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStorageError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> Result<Self, SessionStorageError> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(path, ambient_authority()))
            .map(|dir| Self {
                dir,
                path: path.to_path_buf(),
            })
            .map_err(|err| io_error(path, &err))
    }

    /// Directory holding the session record.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn record_path(&self) -> Utf8PathBuf {
        self.path.join(SESSION_FILE)
    }

    fn write_atomic(&self, contents: &str) -> io::Result<()> {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp_name = format!(".{SESSION_FILE}.tmp.{}.{counter}", std::process::id());

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let written = self.dir.open_with(&tmp_name, &options).and_then(|mut file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        });
        let renamed = written.and_then(|()| self.dir.rename(&tmp_name, &self.dir, SESSION_FILE));
        if renamed.is_err() && self.dir.remove_file(&tmp_name).is_err() {
            debug!(file = %tmp_name, "temporary session file was not cleaned up");
        }
        renamed
    }
}

fn io_error(path: &Utf8Path, err: &io::Error) -> SessionStorageError {
    SessionStorageError::io(format!("{path}: {err}"))
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<Option<Session>, SessionStorageError> {
        let contents = match self.dir.read_to_string(SESSION_FILE) {
            Ok(contents) => Zeroizing::new(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error(&self.record_path(), &err)),
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|err| SessionStorageError::corrupt(format!("{}: {err}", self.record_path())))
    }

    fn save(&self, session: &Session) -> Result<(), SessionStorageError> {
        let contents = serde_json::to_string(session)
            .map(Zeroizing::new)
            .map_err(|err| SessionStorageError::io(format!("failed to encode session: {err}")))?;
        self.write_atomic(&contents)
            .map_err(|err| io_error(&self.record_path(), &err))?;
        debug!(path = %self.record_path(), "session record written");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStorageError> {
        match self.dir.remove_file(SESSION_FILE) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(&self.record_path(), &err)),
        }
    }
}
