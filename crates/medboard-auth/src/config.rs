//! Session configuration.
//!
//! # Example (TOML)
//!
//! ```toml
//! [session]
//! backend = "file"
//! directory = "/var/lib/medboard/session"
//! user_key = "medboard.user"
//! token_key = "medboard.token"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::session::SessionKeys;

/// Root auth configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    pub session: SessionConfig,
}

/// Where and under which keys the active session is persisted.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    pub backend: SessionBackend,

    /// Directory for the file backend. Defaults to `~/.medboard/session`.
    pub directory: Option<PathBuf>,

    /// Key holding the serialized user.
    pub user_key: String,

    /// Key holding the session token.
    pub token_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::File,
            directory: None,
            user_key: SessionKeys::DEFAULT_USER_KEY.to_string(),
            token_key: SessionKeys::DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn keys(&self) -> SessionKeys {
        SessionKeys::new(&self.user_key, &self.token_key)
    }
}

/// Session store implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// One file per key, survives across process runs.
    #[default]
    File,
    /// Process-local map. Nothing survives exit.
    Memory,
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An invalid configuration value was provided.
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    /// A required configuration value is missing.
    #[error("Missing required configuration: {0}")]
    Missing(String),
}

impl AuthConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if a session key is empty, and
    /// `ConfigError::InvalidValue` if both keys are equal or a key contains
    /// characters other than `[A-Za-z0-9._-]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let session = &self.session;

        for (name, key) in [("user_key", &session.user_key), ("token_key", &session.token_key)] {
            if key.is_empty() {
                return Err(ConfigError::Missing(format!("session.{name}")));
            }
            if !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
            {
                return Err(ConfigError::InvalidValue(format!(
                    "session.{name} '{key}' may only contain letters, digits, '.', '_' and '-'"
                )));
            }
        }

        if session.user_key == session.token_key {
            return Err(ConfigError::InvalidValue(
                "session.user_key and session.token_key must differ".to_string(),
            ));
        }

        if let Some(dir) = &session.directory
            && dir.as_os_str().is_empty()
        {
            return Err(ConfigError::InvalidValue(
                "session.directory cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
