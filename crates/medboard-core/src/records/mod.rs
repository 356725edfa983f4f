//! Clinical record types and the ownership keys the access layer filters on.

mod activity;
mod appointment;
mod consultation;
mod emr;
mod lab;
mod patient;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::department::Department;

pub use activity::{ActivityItem, ActivityKind};
pub use appointment::{Appointment, AppointmentStatus};
pub use consultation::{Consultation, ConsultationStatus};
pub use emr::{Emr, EmrStatus};
pub use lab::{LabOrder, LabOrderStatus, LabPriority, LabResult, ResultFlag};
pub use patient::{Gender, Patient, PatientStatus, TriageLevel};

/// The kinds of record the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    Patient,
    Emr,
    LabOrder,
    LabResult,
    Consultation,
    Appointment,
    Activity,
}

impl RecordKind {
    pub const ALL: [RecordKind; 7] = [
        Self::Patient,
        Self::Emr,
        Self::LabOrder,
        Self::LabResult,
        Self::Consultation,
        Self::Appointment,
        Self::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Emr => "emr",
            Self::LabOrder => "lab-order",
            Self::LabResult => "lab-result",
            Self::Consultation => "consultation",
            Self::Appointment => "appointment",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ownership keys of a record.
///
/// A key a record type does not carry returns `None`; visibility rules that
/// need a missing key never match.
pub trait Scoped {
    const KIND: RecordKind;

    fn record_id(&self) -> &str;

    /// Assigned or ordering doctor.
    fn doctor_id(&self) -> Option<&str> {
        None
    }

    fn department(&self) -> Option<&Department> {
        None
    }

    /// Patient this record belongs to. A patient is its own subject.
    fn patient_id(&self) -> Option<&str> {
        None
    }
}
