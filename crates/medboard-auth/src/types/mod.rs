//! Identity and authorization types: users, roles and permissions.

pub mod permission;
pub mod role;
pub mod user;

pub use permission::{Permission, PermissionSet};
pub use role::Role;
pub use user::{User, UserBuilder, has_permission};
