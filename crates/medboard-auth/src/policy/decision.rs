//! Allow/deny gates.
//!
//! A denial is a normal outcome: front ends render it as "Access Denied"
//! and stop, rather than treating it as an error.

use serde::Serialize;

use crate::types::{Permission, User};

/// Outcome of a permission gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Access is granted.
    Allow,
    /// Access is denied with a reason.
    Deny(DenyReason),
}

impl AccessDecision {
    /// Returns `true` if access was granted.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns `true` if access was denied.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Deny(_))
    }

    /// Get the deny reason if access was denied.
    #[must_use]
    pub fn deny_reason(&self) -> Option<&DenyReason> {
        match self {
            Self::Deny(reason) => Some(reason),
            Self::Allow => None,
        }
    }
}

/// Reason for access denial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenyReason {
    /// Error code for programmatic handling.
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// The permission that was missing, if the gate checked one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Permission>,
}

impl DenyReason {
    /// Create a denial reason for a missing session.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self {
            code: "unauthenticated".to_string(),
            message: "You must be logged in to view this page".to_string(),
            required: None,
        }
    }

    /// Create a denial reason for a missing permission.
    #[must_use]
    pub fn insufficient_permission(required: Permission) -> Self {
        Self {
            code: "insufficient-permission".to_string(),
            message: format!("You do not have the {required} permission"),
            required: Some(required),
        }
    }
}

/// Gates a page on one permission.
#[must_use]
pub fn require_permission(user: Option<&User>, permission: Permission) -> AccessDecision {
    match user {
        None => AccessDecision::Deny(DenyReason::unauthenticated()),
        Some(user) if user.has_permission(permission) => AccessDecision::Allow,
        Some(user) => {
            tracing::debug!(
                user_id = %user.id,
                role = %user.role,
                permission = %permission,
                "permission denied"
            );
            AccessDecision::Deny(DenyReason::insufficient_permission(permission))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn test_no_user_is_unauthenticated() {
        let decision = require_permission(None, Permission::DashboardView);
        assert!(decision.is_denied());
        assert_eq!(decision.deny_reason().unwrap().code, "unauthenticated");
    }

    #[test]
    fn test_missing_permission() {
        let accountant = User::builder("b1", "ledger", Role::Accountant).build();
        let decision = require_permission(Some(&accountant), Permission::EmrView);

        let reason = decision.deny_reason().unwrap();
        assert_eq!(reason.code, "insufficient-permission");
        assert_eq!(reason.required, Some(Permission::EmrView));
        assert!(reason.message.contains("emr:view"));
    }

    #[test]
    fn test_grant_allows() {
        let accountant = User::builder("b1", "ledger", Role::Accountant)
            .grant(Permission::EmrView)
            .build();
        assert!(require_permission(Some(&accountant), Permission::EmrView).is_allowed());
    }

    #[test]
    fn test_deny_reason_json() {
        let json = serde_json::to_value(DenyReason::insufficient_permission(
            Permission::BillingView,
        ))
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "insufficient-permission",
                "message": "You do not have the billing:view permission",
                "required": "billing:view"
            })
        );
    }
}
