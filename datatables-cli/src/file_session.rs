//! JSON file session backend.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::sync::RwLock;

use datatables_lib::error::SessionError;
use datatables_lib::session::SessionStore;

/// Session state persisted as one JSON object on disk.
///
/// The file is read once on open and rewritten on every change, so state
/// survives between CLI invocations.
pub struct FileSession {
    path: PathBuf,
    entries: RwLock<serde_json::Map<String, serde_json::Value>>,
}

impl FileSession {
    /// Opens the session at `path`. A missing file is an empty session.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => serde_json::Map::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|source| SessionError::Decode {
                key: path.display().to_string(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => serde_json::Map::new(),
            Err(e) => return Err(storage(&path, e)),
        };
        log::debug!("opened session file {} ({} keys)", path.display(), entries.len());
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, entries: &serde_json::Map<String, serde_json::Value>) -> Result<(), SessionError> {
        let text = serde_json::to_string_pretty(entries).map_err(|source| SessionError::Encode {
            key: self.path.display().to_string(),
            source,
        })?;
        fs::write(&self.path, text).map_err(|e| storage(&self.path, e))
    }
}

fn storage(path: &Path, e: io::Error) -> SessionError {
    SessionError::Storage(format!("{}: {}", path.display(), e))
}

impl SessionStore for FileSession {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.entries
            .read()
            .map(|guard| guard.get(key).cloned())
            .unwrap_or_else(|poisoned| poisoned.into_inner().get(key).cloned())
    }

    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), SessionError> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| SessionError::Storage("session lock poisoned".to_string()))?;
        guard.insert(key.to_string(), value);
        self.save(&guard)
    }

    fn delete(&self, key: &str) -> Result<(), SessionError> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| SessionError::Storage("session lock poisoned".to_string()))?;
        if guard.remove(key).is_some() {
            self.save(&guard)?;
        }
        Ok(())
    }
}
