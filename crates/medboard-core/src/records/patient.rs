use serde::{Deserialize, Serialize};
use time::Date;

use super::{RecordKind, Scoped};
use crate::dates::iso_date;
use crate::department::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Self::Female, Self::Male, Self::Other, Self::Unknown];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatientStatus {
    Admitted,
    Outpatient,
    Discharged,
    Critical,
}

/// Emergency triage level, 1 (resuscitation) to 5 (non-urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TriageLevel(u8);

impl TriageLevel {
    pub const MOST_URGENT: u8 = 1;
    pub const LEAST_URGENT: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for TriageLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (Self::MOST_URGENT..=Self::LEAST_URGENT).contains(&level) {
            Ok(Self(level))
        } else {
            Err(format!(
                "triage level must be {}-{}, got {level}",
                Self::MOST_URGENT,
                Self::LEAST_URGENT
            ))
        }
    }
}

impl From<TriageLevel> for u8 {
    fn from(level: TriageLevel) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,

    /// Medical record number. Display data only.
    pub mrn: String,

    pub name: String,

    pub gender: Gender,

    #[serde(with = "iso_date")]
    pub birth_date: Date,

    /// Id of the assigned doctor.
    pub doctor_id: String,

    pub department: Department,

    pub status: PatientStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triage_level: Option<TriageLevel>,
}

impl Patient {
    pub fn is_critical(&self) -> bool {
        self.status == PatientStatus::Critical
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self.status, PatientStatus::Admitted | PatientStatus::Critical)
    }

    /// Still in the hospital's care but not yet triaged.
    pub fn awaiting_triage(&self) -> bool {
        self.status != PatientStatus::Discharged && self.triage_level.is_none()
    }
}

impl Scoped for Patient {
    const KIND: RecordKind = RecordKind::Patient;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn doctor_id(&self) -> Option<&str> {
        Some(&self.doctor_id)
    }

    fn department(&self) -> Option<&Department> {
        Some(&self.department)
    }

    fn patient_id(&self) -> Option<&str> {
        Some(&self.id)
    }
}
