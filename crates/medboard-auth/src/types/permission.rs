//! The permission vocabulary and permission sets.
//!
//! Permissions are `area:action` tags such as `laboratory:view`. The
//! vocabulary is closed: tags outside it never grant anything, except through
//! the administrator wildcard.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AuthError;

// =============================================================================
// Permission
// =============================================================================

/// A single permission tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "dashboard:view")]
    DashboardView,
    #[serde(rename = "patients:view")]
    PatientsView,
    #[serde(rename = "patients:edit")]
    PatientsEdit,
    #[serde(rename = "emr:view")]
    EmrView,
    #[serde(rename = "emr:edit")]
    EmrEdit,
    #[serde(rename = "laboratory:view")]
    LaboratoryView,
    #[serde(rename = "laboratory:manage")]
    LaboratoryManage,
    #[serde(rename = "radiology:view")]
    RadiologyView,
    #[serde(rename = "radiology:manage")]
    RadiologyManage,
    #[serde(rename = "pharmacy:view")]
    PharmacyView,
    #[serde(rename = "pharmacy:dispense")]
    PharmacyDispense,
    #[serde(rename = "billing:view")]
    BillingView,
    #[serde(rename = "billing:manage")]
    BillingManage,
    #[serde(rename = "scheduling:view")]
    SchedulingView,
    #[serde(rename = "scheduling:manage")]
    SchedulingManage,
    #[serde(rename = "consultations:view")]
    ConsultationsView,
    #[serde(rename = "reports:view")]
    ReportsView,
    #[serde(rename = "triage:view")]
    TriageView,
    #[serde(rename = "users:manage")]
    UsersManage,
    #[serde(rename = "settings:manage")]
    SettingsManage,
}

impl Permission {
    /// Every permission, in tag order of the dashboard menu.
    pub const ALL: [Permission; 20] = [
        Self::DashboardView,
        Self::PatientsView,
        Self::PatientsEdit,
        Self::EmrView,
        Self::EmrEdit,
        Self::LaboratoryView,
        Self::LaboratoryManage,
        Self::RadiologyView,
        Self::RadiologyManage,
        Self::PharmacyView,
        Self::PharmacyDispense,
        Self::BillingView,
        Self::BillingManage,
        Self::SchedulingView,
        Self::SchedulingManage,
        Self::ConsultationsView,
        Self::ReportsView,
        Self::TriageView,
        Self::UsersManage,
        Self::SettingsManage,
    ];

    /// The wire tag, e.g. `"laboratory:view"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DashboardView => "dashboard:view",
            Self::PatientsView => "patients:view",
            Self::PatientsEdit => "patients:edit",
            Self::EmrView => "emr:view",
            Self::EmrEdit => "emr:edit",
            Self::LaboratoryView => "laboratory:view",
            Self::LaboratoryManage => "laboratory:manage",
            Self::RadiologyView => "radiology:view",
            Self::RadiologyManage => "radiology:manage",
            Self::PharmacyView => "pharmacy:view",
            Self::PharmacyDispense => "pharmacy:dispense",
            Self::BillingView => "billing:view",
            Self::BillingManage => "billing:manage",
            Self::SchedulingView => "scheduling:view",
            Self::SchedulingManage => "scheduling:manage",
            Self::ConsultationsView => "consultations:view",
            Self::ReportsView => "reports:view",
            Self::TriageView => "triage:view",
            Self::UsersManage => "users:manage",
            Self::SettingsManage => "settings:manage",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AuthError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == tag)
            .ok_or_else(|| AuthError::unknown_permission(tag))
    }
}

// =============================================================================
// Permission Set
// =============================================================================

/// The permissions a role (or user) holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionSet {
    /// Wildcard: every permission, including tags outside the vocabulary.
    All,
    /// Exactly these permissions.
    Only(BTreeSet<Permission>),
}

impl PermissionSet {
    /// The empty set.
    #[must_use]
    pub fn none() -> Self {
        Self::Only(BTreeSet::new())
    }

    #[must_use]
    pub fn of(permissions: &[Permission]) -> Self {
        Self::Only(permissions.iter().copied().collect())
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Only(set) if set.is_empty())
    }

    #[must_use]
    pub fn contains(&self, permission: Permission) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(&permission),
        }
    }

    /// Checks a raw tag. Unknown tags only pass the wildcard.
    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => tag
                .parse::<Permission>()
                .is_ok_and(|permission| set.contains(&permission)),
        }
    }

    /// Adds explicit grants. The wildcard absorbs everything.
    #[must_use]
    pub fn with_grants(self, grants: &[Permission]) -> Self {
        match self {
            Self::All => Self::All,
            Self::Only(mut set) => {
                set.extend(grants.iter().copied());
                Self::Only(set)
            }
        }
    }

    /// Concrete permissions held, with the wildcard expanded to the full
    /// vocabulary.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Permission> {
        match self {
            Self::All => Permission::ALL.to_vec(),
            Self::Only(set) => set.iter().copied().collect(),
        }
    }
}
