//! Session store trait.
//!
//! A session store is a flat string key/value store, the way browser local
//! storage is. The session manager keeps exactly two keys in it: the
//! serialized user and the opaque session token.
//!
//! # Implementation Notes
//!
//! Implementations should:
//!
//! - Treat `remove` of a missing key as success
//! - Never log stored values (they contain the session token)

use crate::AuthResult;

/// Storage trait for the persisted session.
pub trait SessionStore: Send + Sync {
    /// Reads a key.
    ///
    /// Returns `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> AuthResult<Option<String>>;

    /// Writes a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> AuthResult<()>;

    /// Deletes a key. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> AuthResult<()>;

    /// Returns `true` if the key is present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn contains(&self, key: &str) -> AuthResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> AuthResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> AuthResult<()> {
        (**self).remove(key)
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn get(&self, key: &str) -> AuthResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> AuthResult<()> {
        (**self).remove(key)
    }
}
