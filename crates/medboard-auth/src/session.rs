//! The session lifecycle.
//!
//! ```text
//! unauthenticated --login--> authenticated --logout--> unauthenticated
//! ```
//!
//! The [`SessionManager`] is built once at startup with [`SessionManager::restore`]
//! and only changes through [`login`](SessionManager::login) and
//! [`logout`](SessionManager::logout). The store holds two keys: the
//! serialized [`User`] and the [`SessionToken`].

use std::fmt;

use rand::Rng;

use crate::storage::{SessionStore, UserDirectory};
use crate::types::{Permission, User};
use crate::{AuthError, AuthResult};

/// Session token prefix.
const TOKEN_PREFIX: &str = "sess_";

/// Random bytes in a token (hex encoded after the prefix).
const TOKEN_BYTES: usize = 32;

/// Opaque session token: `sess_` followed by 64 hex characters.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        let bytes: [u8; TOKEN_BYTES] = rand::thread_rng().r#gen();
        Self(format!("{TOKEN_PREFIX}{}", hex::encode(bytes)))
    }

    /// Parses a stored token.
    ///
    /// # Errors
    ///
    /// Returns `CorruptSession` if the value is not a well-formed token.
    pub fn parse(value: &str) -> AuthResult<Self> {
        let value = value.trim();
        let well_formed = value.strip_prefix(TOKEN_PREFIX).is_some_and(|hex| {
            hex.len() == TOKEN_BYTES * 2 && hex.bytes().all(|b| b.is_ascii_hexdigit())
        });
        if !well_formed {
            return Err(AuthError::corrupt_session("malformed session token"));
        }
        Ok(Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Store keys the session lives under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeys {
    user: String,
    token: String,
}

impl SessionKeys {
    pub const DEFAULT_USER_KEY: &'static str = "medboard.user";
    pub const DEFAULT_TOKEN_KEY: &'static str = "medboard.token";

    #[must_use]
    pub fn new(user: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            token: token.into(),
        }
    }

    #[must_use]
    pub fn user_key(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub fn token_key(&self) -> &str {
        &self.token
    }
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self::new(Self::DEFAULT_USER_KEY, Self::DEFAULT_TOKEN_KEY)
    }
}

/// An authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: SessionToken,
}

/// Owns the session store and the current session, if any.
pub struct SessionManager<S: SessionStore> {
    store: S,
    keys: SessionKeys,
    current: Option<Session>,
}

impl<S: SessionStore> SessionManager<S> {
    /// Loads the persisted session from `store`.
    ///
    /// Never fails: an unreadable, partial or corrupt session is logged,
    /// both keys are cleared and the manager starts unauthenticated.
    pub fn restore(store: S, keys: SessionKeys) -> Self {
        let mut manager = Self {
            store,
            keys,
            current: None,
        };

        match manager.load() {
            Ok(Some(session)) => {
                tracing::debug!(user_id = %session.user.id, role = %session.user.role, "session restored");
                manager.current = Some(session);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "discarding stored session");
                manager.discard_stored();
            }
        }

        manager
    }

    /// Authenticates against `directory` and persists the new session,
    /// replacing any current one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` on a bad identifier or password, or a
    /// storage error if the session cannot be persisted. On error the
    /// manager is left unauthenticated and both store keys are cleared.
    pub fn login(
        &mut self,
        directory: &UserDirectory,
        identifier: &str,
        password: &str,
    ) -> AuthResult<&Session> {
        self.current = None;

        let user = match directory.authenticate(identifier, password) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(identifier = %identifier.trim(), "login failed");
                self.discard_stored();
                return Err(e);
            }
        };

        let token = SessionToken::generate();
        if let Err(e) = self.persist(&user, &token) {
            tracing::warn!(error = %e, user_id = %user.id, "failed to persist session");
            self.discard_stored();
            return Err(e);
        }

        tracing::info!(user_id = %user.id, role = %user.role, "logged in");
        Ok(self.current.insert(Session { user, token }))
    }

    /// Ends the current session and clears both store keys.
    ///
    /// Logging out without a session is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the keys cannot be removed. The in-memory
    /// session is dropped either way.
    pub fn logout(&mut self) -> AuthResult<()> {
        if let Some(session) = self.current.take() {
            tracing::info!(user_id = %session.user.id, "logged out");
        }
        self.clear_store()
    }

    /// The authenticated user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|session| &session.user)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Permission check for the current user; `false` when logged out.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        crate::types::has_permission(self.user(), permission)
    }

    #[must_use]
    pub fn keys(&self) -> &SessionKeys {
        &self.keys
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn load(&self) -> AuthResult<Option<Session>> {
        let user = self.store.get(self.keys.user_key())?;
        let token = self.store.get(self.keys.token_key())?;

        match (user, token) {
            (None, None) => Ok(None),
            (Some(user), Some(token)) => {
                let user: User = serde_json::from_str(&user)
                    .map_err(|e| AuthError::corrupt_session(format!("stored user: {e}")))?;
                let token = SessionToken::parse(&token)?;
                Ok(Some(Session { user, token }))
            }
            _ => Err(AuthError::corrupt_session("incomplete session")),
        }
    }

    fn persist(&self, user: &User, token: &SessionToken) -> AuthResult<()> {
        let user = serde_json::to_string(user)
            .map_err(|e| AuthError::internal(format!("cannot serialize user: {e}")))?;
        self.store.set(self.keys.user_key(), &user)?;
        self.store.set(self.keys.token_key(), token.as_str())
    }

    fn discard_stored(&self) {
        if let Err(e) = self.clear_store() {
            tracing::warn!(error = %e, "failed to clear stored session");
        }
    }

    fn clear_store(&self) -> AuthResult<()> {
        let user = self.store.remove(self.keys.user_key());
        let token = self.store.remove(self.keys.token_key());
        user.and(token)
    }
}

impl<S: SessionStore> fmt::Debug for SessionManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("keys", &self.keys)
            .field("user", &self.user().map(|user| &user.id))
            .finish()
    }
}
