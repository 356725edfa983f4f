//! # medboard-auth
//!
//! Who is logged in, what they may do, and which records they may see.
//!
//! ## Modules
//!
//! - [`types`] - Roles, permissions and the authenticated user
//! - [`session`] - Login, logout and session restore over a [`SessionStore`]
//! - [`storage`] - Session stores and the account directory
//! - [`policy`] - Record visibility and permission gates
//! - [`dashboard`] - Role-specific dashboard statistics
//! - [`password`] - Argon2 password hashing
//! - [`config`] - Session configuration
//!
//! ## Example
//!
//! ```
//! use medboard_auth::prelude::*;
//!
//! let nurse = User::builder("n1", "joy", Role::Nurse)
//!     .department("Emergency")
//!     .build();
//!
//! assert!(nurse.has_permission(Permission::TriageView));
//! assert!(!nurse.has_permission(Permission::BillingView));
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod password;
pub mod policy;
pub mod session;
pub mod storage;
pub mod types;

pub use config::{AuthConfig, ConfigError, SessionBackend, SessionConfig};
pub use dashboard::{DashboardStats, gender_distribution, get_dashboard_stats_for_user};
pub use error::AuthError;
pub use policy::{
    AccessDecision, AccessFilter, DenyReason, RecordSet, Visibility, require_permission,
    visibility_for,
};
pub use session::{Session, SessionKeys, SessionManager, SessionToken};
pub use storage::{Account, FileSessionStore, MemorySessionStore, SessionStore, UserDirectory};
pub use types::{Permission, PermissionSet, Role, User, UserBuilder, has_permission};

/// Type alias for authentication/authorization results.
pub type AuthResult<T> = Result<T, AuthError>;

/// Prelude module for convenient imports.
///
/// ```
/// use medboard_auth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::AuthResult;
    pub use crate::config::{AuthConfig, ConfigError, SessionBackend, SessionConfig};
    pub use crate::dashboard::{DashboardStats, gender_distribution, get_dashboard_stats_for_user};
    pub use crate::error::AuthError;
    pub use crate::policy::{
        AccessDecision, AccessFilter, DenyReason, RecordSet, Visibility, require_permission,
        visibility_for,
    };
    pub use crate::session::{Session, SessionKeys, SessionManager, SessionToken};
    pub use crate::storage::{
        Account, FileSessionStore, MemorySessionStore, SessionStore, UserDirectory,
    };
    pub use crate::types::{Permission, PermissionSet, Role, User, UserBuilder, has_permission};
}
