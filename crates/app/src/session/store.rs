//! Session stores.

use std::{
    fmt::Debug,
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use parking_lot::RwLock;
use tracing::debug;

use crate::session::{errors::SessionError, models::SessionIdentity};

/// Holds the logged-in identity.
///
/// Injected wherever a token or the current user id is needed, so tests can
/// swap in [`MemorySessionStore`].
pub trait SessionStore: Debug + Send + Sync {
    /// Current identity, if anyone is logged in.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn get(&self) -> Result<Option<SessionIdentity>, SessionError>;

    /// Replace the current identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn set(&self, identity: SessionIdentity) -> Result<(), SessionError>;

    /// Forget the current identity. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be removed.
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-process store that forgets everything on drop.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    identity: RwLock<Option<SessionIdentity>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: SessionIdentity) -> Self {
        Self {
            identity: RwLock::new(Some(identity)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<SessionIdentity>, SessionError> {
        Ok(self.identity.read().clone())
    }

    fn set(&self, identity: SessionIdentity) -> Result<(), SessionError> {
        *self.identity.write() = Some(identity);

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.identity.write() = None;

        Ok(())
    }
}

/// Store backed by a JSON file, so a session survives restarts.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_private(&self, contents: &[u8]) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut options = fs::OpenOptions::new();

        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;

            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;

        file.write_all(contents)?;
        file.sync_all()?;

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<SessionIdentity>, SessionError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn set(&self, identity: SessionIdentity) -> Result<(), SessionError> {
        let contents = serde_json::to_vec_pretty(&identity)?;

        self.write_private(&contents)?;

        debug!(path = %self.path.display(), user_type = %identity.user_type, "session stored");

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session cleared");

                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
