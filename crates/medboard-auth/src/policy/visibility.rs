//! Which records of each kind a role may see.

use serde::Serialize;

use medboard_core::{RecordKind, Scoped};

use crate::types::{Role, User};

/// The rule a role applies to one kind of record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    /// Every record.
    All,
    /// `doctorId` equals the user's id.
    AssignedDoctor,
    /// The record's department matches the user's. A user without a
    /// department matches nothing.
    Department,
    /// Either of the two above.
    AssignedDoctorOrDepartment,
    /// The record's patient is one the user can see.
    VisiblePatients,
    /// No record.
    Nothing,
}

/// Looks up the visibility rule for a role and record kind.
///
/// `Patient` never maps to [`Visibility::VisiblePatients`]: that rule is
/// defined in terms of the patient list.
#[must_use]
pub fn visibility_for(kind: RecordKind, role: Role) -> Visibility {
    use RecordKind as K;
    use Visibility::*;

    match role {
        Role::Administrator => All,
        Role::Doctor => match kind {
            K::Patient | K::LabOrder | K::Consultation | K::Appointment => AssignedDoctor,
            K::Emr | K::LabResult => VisiblePatients,
            K::Activity => AssignedDoctorOrDepartment,
        },
        Role::Nurse => match kind {
            K::Emr | K::LabResult => VisiblePatients,
            K::Patient | K::LabOrder | K::Consultation | K::Appointment | K::Activity => {
                Department
            }
        },
        Role::AuxiliaryNurse => match kind {
            K::Patient | K::Appointment | K::Activity => Department,
            K::Emr | K::LabOrder | K::LabResult | K::Consultation => Nothing,
        },
        Role::LabTechnician => match kind {
            K::LabOrder | K::LabResult => All,
            K::Activity => Department,
            K::Patient | K::Emr | K::Consultation | K::Appointment => Nothing,
        },
        Role::Radiologist | Role::Pharmacist => match kind {
            K::Activity => Department,
            _ => Nothing,
        },
        Role::Receptionist => match kind {
            K::Patient | K::Consultation | K::Appointment => All,
            K::Emr | K::LabOrder | K::LabResult | K::Activity => Nothing,
        },
        Role::Accountant => match kind {
            K::Patient => All,
            _ => Nothing,
        },
        Role::Unrecognized => Nothing,
    }
}

impl Visibility {
    /// Checks the record's own ownership keys against the user.
    ///
    /// [`Visibility::VisiblePatients`] needs the user's patient list and is
    /// resolved by the access filter; here it never matches.
    pub(crate) fn admits<R: Scoped>(self, record: &R, user: &User) -> bool {
        match self {
            Self::All => true,
            Self::AssignedDoctor => assigned_to(record, user),
            Self::Department => same_department(record, user),
            Self::AssignedDoctorOrDepartment => {
                assigned_to(record, user) || same_department(record, user)
            }
            Self::VisiblePatients | Self::Nothing => false,
        }
    }
}

fn assigned_to<R: Scoped>(record: &R, user: &User) -> bool {
    record.doctor_id() == Some(user.id.as_str())
}

fn same_department<R: Scoped>(record: &R, user: &User) -> bool {
    match (record.department(), &user.department) {
        (Some(record_department), Some(user_department)) => record_department == user_department,
        _ => false,
    }
}
