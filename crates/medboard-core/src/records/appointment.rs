use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{RecordKind, Scoped};
use crate::department::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Booked,
    CheckedIn,
    Completed,
    Cancelled,
    NoShow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub department: Department,
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Booked or already checked in.
    pub fn is_upcoming(&self) -> bool {
        matches!(
            self.status,
            AppointmentStatus::Booked | AppointmentStatus::CheckedIn
        )
    }
}

impl Scoped for Appointment {
    const KIND: RecordKind = RecordKind::Appointment;

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
