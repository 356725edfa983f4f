//! The authenticated user.

use serde::{Deserialize, Serialize};

use medboard_core::Department;

use super::permission::{Permission, PermissionSet};
use super::role::Role;

/// A staff user.
///
/// This is what the session store persists, so it never carries password
/// material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier; doctors' records reference it as `doctorId`.
    pub id: String,

    /// Login name.
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub role: Role,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,

    /// Grants on top of the role's permissions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
}

impl User {
    #[must_use]
    pub fn builder(id: impl Into<String>, username: impl Into<String>, role: Role) -> UserBuilder {
        UserBuilder::new(id, username, role)
    }

    /// Role permissions plus explicit grants.
    ///
    /// An unrecognized role yields the empty set; explicit grants do not
    /// apply to it.
    #[must_use]
    pub fn effective_permissions(&self) -> PermissionSet {
        if !self.role.is_recognized() {
            return PermissionSet::none();
        }
        self.role.permissions().with_grants(&self.permissions)
    }

    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.effective_permissions().contains(permission)
    }

    /// String form of [`has_permission`](Self::has_permission).
    #[must_use]
    pub fn has_permission_tag(&self, tag: &str) -> bool {
        self.effective_permissions().contains_tag(tag)
    }

    /// Name to show in the UI.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

/// Builder for creating `User` instances.
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    fn new(id: impl Into<String>, username: impl Into<String>, role: Role) -> Self {
        Self {
            user: User {
                id: id.into(),
                username: username.into(),
                email: None,
                name: None,
                role,
                department: None,
                permissions: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.user.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.user.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn department(mut self, department: impl Into<Department>) -> Self {
        self.user.department = Some(department.into());
        self
    }

    #[must_use]
    pub fn grant(mut self, permission: Permission) -> Self {
        self.user.permissions.push(permission);
        self
    }

    #[must_use]
    pub fn build(self) -> User {
        self.user
    }
}

/// Permission check that treats a missing user as "deny".
#[must_use]
pub fn has_permission(user: Option<&User>, permission: Permission) -> bool {
    user.is_some_and(|u| u.has_permission(permission))
}
