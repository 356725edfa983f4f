//! Authentication and authorization error types.
//!
//! Authorization *decisions* are not errors: a denied permission check is an
//! [`AccessDecision::Deny`](crate::policy::AccessDecision). The variants here
//! cover failed logins, account data problems and session storage.

/// Errors that can occur during authentication and session handling.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The identifier or password did not match any account.
    ///
    /// Deliberately does not say which of the two was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The permission tag is not part of the permission vocabulary.
    #[error("Unknown permission: {tag}")]
    UnknownPermission {
        /// The unrecognized tag.
        tag: String,
    },

    /// Two accounts share an id, username or email.
    #[error("Duplicate account: {identifier}")]
    DuplicateAccount {
        /// The identifier that appears more than once.
        identifier: String,
    },

    /// The session store could not be read or written.
    #[error("Session storage error: {message}")]
    SessionStorage {
        /// Description of the storage error.
        message: String,
    },

    /// A stored session could not be decoded.
    #[error("Corrupt session: {message}")]
    CorruptSession {
        /// Description of what was wrong with the stored data.
        message: String,
    },

    /// Hashing or verifying a password failed.
    #[error("Password hashing error: {message}")]
    PasswordHash {
        /// Description of the hashing error.
        message: String,
    },

    /// An unexpected internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl AuthError {
    /// Creates a new `UnknownPermission` error.
    #[must_use]
    pub fn unknown_permission(tag: impl Into<String>) -> Self {
        Self::UnknownPermission { tag: tag.into() }
    }

    /// Creates a new `DuplicateAccount` error.
    #[must_use]
    pub fn duplicate_account(identifier: impl Into<String>) -> Self {
        Self::DuplicateAccount {
            identifier: identifier.into(),
        }
    }

    /// Creates a new `SessionStorage` error.
    #[must_use]
    pub fn session_storage(message: impl Into<String>) -> Self {
        Self::SessionStorage {
            message: message.into(),
        }
    }

    /// Creates a new `CorruptSession` error.
    #[must_use]
    pub fn corrupt_session(message: impl Into<String>) -> Self {
        Self::CorruptSession {
            message: message.into(),
        }
    }

    /// Creates a new `PasswordHash` error.
    #[must_use]
    pub fn password_hash(message: impl Into<String>) -> Self {
        Self::PasswordHash {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::password_hash(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
        assert_eq!(
            AuthError::unknown_permission("wards:fly").to_string(),
            "Unknown permission: wards:fly"
        );
        assert_eq!(
            AuthError::session_storage("disk full").to_string(),
            "Session storage error: disk full"
        );
    }

    #[test]
    fn test_password_hash_error_converts() {
        let err: AuthError = argon2::password_hash::Error::Password.into();
        assert!(matches!(err, AuthError::PasswordHash { .. }));
    }
}
