pub mod access;
pub mod auth;
pub mod config;
pub mod pages;
pub mod stats;

use medboard_auth::{AccessDecision, Permission, require_permission};

use crate::app::App;
use crate::output::print_access_denied;

/// Runs the permission gate in front of a page. Prints "Access Denied" and
/// returns `false` when the page must not render.
pub(crate) fn gate(app: &App, permission: Permission) -> bool {
    match require_permission(app.user(), permission) {
        AccessDecision::Allow => true,
        AccessDecision::Deny(reason) => {
            print_access_denied(&reason);
            false
        }
    }
}
