use serde::{Deserialize, Serialize};
use time::Date;

use super::{RecordKind, Scoped};
use crate::dates::iso_date;
use crate::department::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub department: Department,
    #[serde(with = "iso_date")]
    pub scheduled_on: Date,
    pub status: ConsultationStatus,
    pub reason: String,
}

impl Consultation {
    pub fn is_upcoming(&self) -> bool {
        self.status == ConsultationStatus::Scheduled
    }
}

impl Scoped for Consultation {
    const KIND: RecordKind = RecordKind::Consultation;

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
