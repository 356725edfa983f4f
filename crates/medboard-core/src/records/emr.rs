use serde::{Deserialize, Serialize};
use time::Date;

use super::{RecordKind, Scoped};
use crate::dates::iso_date;
use crate::department::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmrStatus {
    Draft,
    Pending,
    Signed,
}

/// Electronic medical record entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emr {
    pub id: String,
    pub patient_id: String,
    /// Authoring doctor.
    pub doctor_id: String,
    pub department: Department,
    pub status: EmrStatus,
    #[serde(with = "iso_date")]
    pub created_on: Date,
    pub summary: String,
}

impl Emr {
    /// Not yet signed off.
    pub fn is_pending(&self) -> bool {
        matches!(self.status, EmrStatus::Draft | EmrStatus::Pending)
    }
}

impl Scoped for Emr {
    const KIND: RecordKind = RecordKind::Emr;

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
        Some(&self.patient_id)
    }
}
