//! Session persistence shim.
//!
//! A string key-value store (the browser's `localStorage` shape) holding the
//! serialized user under [`keys::USER`] and the opaque token under
//! [`keys::TOKEN`]. Read once at startup, written on login/signup, cleared on
//! logout.
//!
//! The token is stored in plain text. This is a demo shim, not a credential
//! vault.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use secrecy::{ExposeSecret, SecretString};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

use shopfront_core::User;

use crate::models::session::keys;

/// Errors from the key-value backend or the stored record.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A stored value could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing file could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A previous holder of the store lock panicked.
    #[error("session store lock poisoned")]
    Poisoned,
}

/// String key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// Backends
// =============================================================================

/// Process-local store; forgotten on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Store persisted as a single JSON object in a file.
///
/// Every write replaces the whole file through a temp file in the same
/// directory, so a crash mid-write leaves the previous contents. A missing
/// file reads as empty. Reads of an unparseable file fail; writes overwrite it.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Entries to start a write from, and whether the file must be rewritten
    /// even if nothing changes.
    fn read_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.read_all() {
            Ok(entries) => Ok((entries, false)),
            Err(StorageError::Serialization(e)) => {
                warn!(path = %self.path.display(), error = %e, "Overwriting unreadable session file");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, entries)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let (mut entries, _) = self.read_for_write()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let (mut entries, unreadable) = self.read_for_write()?;
        if entries.remove(key).is_some() || unreadable {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

// =============================================================================
// SessionStorage
// =============================================================================

/// What was found in storage at startup.
#[derive(Debug, Default)]
pub struct PersistedAuth {
    pub user: Option<User>,
    pub token: Option<SecretString>,
}

/// Typed access to the two session keys.
#[derive(Clone)]
pub struct SessionStorage {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStorage {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist the signed-in user and token.
    ///
    /// The user record goes last: it is what hydration keys off, so a failed
    /// write never leaves a restorable session behind. Both keys are removed
    /// on failure.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if serialization or the backend fails.
    pub fn save_auth(&self, user: &User, token: &SecretString) -> Result<(), StorageError> {
        let record = serde_json::to_string(user)?;
        let written = self
            .store
            .set(keys::TOKEN, token.expose_secret())
            .and_then(|()| self.store.set(keys::USER, &record));

        if let Err(e) = written {
            if let Err(rollback) = self.clear_auth() {
                warn!(error = %rollback, "Failed to roll back partial session write");
            }
            return Err(e);
        }

        debug!(user_id = %user.id, "Persisted session");
        Ok(())
    }

    /// Read the persisted user and token.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the user record is corrupt.
    pub fn load_auth(&self) -> Result<PersistedAuth, StorageError> {
        let user = self
            .store
            .get(keys::USER)?
            .map(|raw| serde_json::from_str::<User>(&raw))
            .transpose()?;
        let token = self.store.get(keys::TOKEN)?.map(SecretString::from);
        Ok(PersistedAuth { user, token })
    }

    /// Remove both session keys.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend fails.
    pub fn clear_auth(&self) -> Result<(), StorageError> {
        self.store.remove(keys::USER)?;
        self.store.remove(keys::TOKEN)?;
        Ok(())
    }
}
