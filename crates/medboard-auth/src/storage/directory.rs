//! The static account list.
//!
//! Accounts come from fixture data with plaintext passwords; the directory
//! hashes them once at construction and keeps only the hashes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::password::{hash_password, verify_password};
use crate::types::User;
use crate::{AuthError, AuthResult};

/// An account as it appears in fixture data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(flatten)]
    pub user: User,

    /// Plaintext password. Only ever read to build a [`UserDirectory`].
    pub password: String,
}

struct DirectoryEntry {
    user: User,
    password_hash: String,
}

/// Accounts that can log in.
pub struct UserDirectory {
    entries: Vec<DirectoryEntry>,
}

impl UserDirectory {
    /// Builds a directory, hashing every password.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if two accounts share an id, a username or
    /// an email (emails compared case-insensitively), or `PasswordHash` if
    /// hashing fails.
    pub fn from_accounts(accounts: &[Account]) -> AuthResult<Self> {
        let mut ids = HashSet::new();
        let mut logins = HashSet::new();
        let mut entries = Vec::with_capacity(accounts.len());

        for account in accounts {
            let user = &account.user;
            if !ids.insert(user.id.as_str()) {
                return Err(AuthError::duplicate_account(&user.id));
            }
            if !logins.insert(user.username.to_ascii_lowercase()) {
                return Err(AuthError::duplicate_account(&user.username));
            }
            if let Some(email) = &user.email
                && !logins.insert(email.to_ascii_lowercase())
            {
                return Err(AuthError::duplicate_account(email));
            }

            entries.push(DirectoryEntry {
                user: user.clone(),
                password_hash: hash_password(&account.password)?,
            });
        }

        tracing::debug!(accounts = entries.len(), "user directory built");
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a user by username or email (both case-insensitive).
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<&User> {
        self.entry(identifier).map(|entry| &entry.user)
    }

    /// Looks up a user by id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.entries
            .iter()
            .map(|entry| &entry.user)
            .find(|user| user.id == id)
    }

    /// Checks a username-or-email and password pair.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` for an unknown identifier or a wrong
    /// password alike.
    pub fn authenticate(&self, identifier: &str, password: &str) -> AuthResult<User> {
        let Some(entry) = self.entry(identifier) else {
            return Err(AuthError::InvalidCredentials);
        };
        if !verify_password(password, &entry.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(entry.user.clone())
    }

    fn entry(&self, identifier: &str) -> Option<&DirectoryEntry> {
        let identifier = identifier.trim();
        self.entries.iter().find(|entry| {
            entry.user.username.eq_ignore_ascii_case(identifier)
                || entry
                    .user
                    .email
                    .as_deref()
                    .is_some_and(|email| email.eq_ignore_ascii_case(identifier))
        })
    }
}

impl std::fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDirectory")
            .field("accounts", &self.entries.len())
            .finish()
    }
}
