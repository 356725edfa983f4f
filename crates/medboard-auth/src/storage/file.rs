//! File-backed session store.
//!
//! Each key is one file inside the store directory, named after the key.
//! Keys are restricted to `[A-Za-z0-9._-]` so a key can never escape the
//! directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::session::SessionStore;
use crate::{AuthError, AuthResult};

/// Session store keeping one file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Opens (and creates if needed) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `SessionStorage` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> AuthResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            AuthError::session_storage(format!("cannot create {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    /// Default location: `~/.medboard/session`.
    ///
    /// # Errors
    ///
    /// Returns `SessionStorage` if the home directory is unknown or the
    /// directory cannot be created.
    pub fn open_default() -> AuthResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| AuthError::session_storage("cannot determine home directory"))?;
        Self::open(home.join(".medboard").join("session"))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> AuthResult<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(AuthError::session_storage(format!(
                "invalid session key '{key}'"
            )));
        }
        Ok(self.dir.join(key))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> AuthResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::session_storage(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        let path = self.path_for(key)?;
        fs::write(&path, value).map_err(|e| {
            AuthError::session_storage(format!("cannot write {}: {e}", path.display()))
        })
    }

    fn remove(&self, key: &str) -> AuthResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::session_storage(format!(
                "cannot remove {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().join("session")).unwrap();

        store.set("medboard.token", "sess_abc").unwrap();
        assert_eq!(
            fs::read_to_string(store.dir().join("medboard.token")).unwrap(),
            "sess_abc"
        );
        assert_eq!(
            store.get("medboard.token").unwrap().as_deref(),
            Some("sess_abc")
        );

        store.remove("medboard.token").unwrap();
        assert_eq!(store.get("medboard.token").unwrap(), None);
        assert!(store.remove("medboard.token").is_ok());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path()).unwrap();

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("a/b").is_err());
        assert!(store.get("..").is_err());
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        FileSessionStore::open(dir.path())
            .unwrap()
            .set("medboard.user", "{}")
            .unwrap();

        let reopened = FileSessionStore::open(dir.path()).unwrap();
        assert!(reopened.contains("medboard.user").unwrap());
    }
}
