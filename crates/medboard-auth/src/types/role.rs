//! Staff roles and the static role → permission table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::permission::{Permission, PermissionSet};

/// A fixed category of staff user.
///
/// Any role name the system does not know deserializes to
/// [`Role::Unrecognized`], which holds no permissions and sees no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Administrator,
    Doctor,
    Nurse,
    AuxiliaryNurse,
    LabTechnician,
    Radiologist,
    Pharmacist,
    Receptionist,
    Accountant,
    #[serde(other)]
    Unrecognized,
}

impl Role {
    /// Every recognized role.
    pub const KNOWN: [Role; 9] = [
        Self::Administrator,
        Self::Doctor,
        Self::Nurse,
        Self::AuxiliaryNurse,
        Self::LabTechnician,
        Self::Radiologist,
        Self::Pharmacist,
        Self::Receptionist,
        Self::Accountant,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Doctor => "doctor",
            Self::Nurse => "nurse",
            Self::AuxiliaryNurse => "auxiliary-nurse",
            Self::LabTechnician => "lab-technician",
            Self::Radiologist => "radiologist",
            Self::Pharmacist => "pharmacist",
            Self::Receptionist => "receptionist",
            Self::Accountant => "accountant",
            Self::Unrecognized => "unrecognized",
        }
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// Permissions granted by this role.
    #[must_use]
    pub fn permissions(&self) -> PermissionSet {
        use Permission::*;

        match self {
            Self::Administrator => PermissionSet::All,
            Self::Doctor => PermissionSet::of(&[
                DashboardView,
                PatientsView,
                PatientsEdit,
                EmrView,
                EmrEdit,
                LaboratoryView,
                RadiologyView,
                PharmacyView,
                SchedulingView,
                ConsultationsView,
                ReportsView,
            ]),
            Self::Nurse => PermissionSet::of(&[
                DashboardView,
                PatientsView,
                EmrView,
                LaboratoryView,
                PharmacyView,
                SchedulingView,
                ConsultationsView,
                TriageView,
            ]),
            Self::AuxiliaryNurse => PermissionSet::of(&[
                DashboardView,
                PatientsView,
                SchedulingView,
                TriageView,
            ]),
            Self::LabTechnician => {
                PermissionSet::of(&[DashboardView, LaboratoryView, LaboratoryManage])
            }
            Self::Radiologist => {
                PermissionSet::of(&[DashboardView, RadiologyView, RadiologyManage])
            }
            Self::Pharmacist => {
                PermissionSet::of(&[DashboardView, PharmacyView, PharmacyDispense])
            }
            Self::Receptionist => PermissionSet::of(&[
                DashboardView,
                PatientsView,
                SchedulingView,
                SchedulingManage,
                ConsultationsView,
            ]),
            Self::Accountant => PermissionSet::of(&[
                DashboardView,
                PatientsView,
                BillingView,
                BillingManage,
                ReportsView,
            ]),
            Self::Unrecognized => PermissionSet::none(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_administrator_is_wildcard() {
        assert!(Role::Administrator.permissions().is_wildcard());
    }

    #[test]
    fn test_only_administrator_is_wildcard() {
        for role in Role::KNOWN {
            if role != Role::Administrator {
                assert!(!role.permissions().is_wildcard(), "{role} must not be wildcard");
            }
        }
    }

    #[test]
    fn test_every_recognized_role_sees_dashboard() {
        for role in Role::KNOWN {
            assert!(role.permissions().contains(Permission::DashboardView));
        }
    }

    #[test]
    fn test_unrecognized_role_has_nothing() {
        assert!(Role::Unrecognized.permissions().is_empty());
        assert!(!Role::Unrecognized.is_recognized());
    }

    #[test]
    fn test_unknown_role_name_deserializes_to_unrecognized() {
        let role: Role = serde_json::from_str("\"janitor\"").unwrap();
        assert_eq!(role, Role::Unrecognized);

        let role: Role = serde_json::from_str("\"auxiliary-nurse\"").unwrap();
        assert_eq!(role, Role::AuxiliaryNurse);
    }

    #[test]
    fn test_doctor_permissions() {
        let perms = Role::Doctor.permissions();
        assert!(perms.contains(Permission::EmrEdit));
        assert!(perms.contains(Permission::LaboratoryView));
        assert!(!perms.contains(Permission::LaboratoryManage));
        assert!(!perms.contains(Permission::BillingView));
    }

    #[test]
    fn test_auxiliary_nurse_is_triage_only() {
        let perms = Role::AuxiliaryNurse.permissions();
        assert!(perms.contains(Permission::TriageView));
        assert!(!perms.contains(Permission::EmrView));
        assert!(!perms.contains(Permission::LaboratoryView));
    }
}
