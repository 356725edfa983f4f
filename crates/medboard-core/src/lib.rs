//! Core record types for medboard.
//!
//! Every record the dashboard renders (patients, EMRs, lab orders and results,
//! consultations, appointments, activity feed items) is a flat, immutable value
//! carrying the ownership keys used by the access layer: an assigned doctor, a
//! department, or a patient reference. The [`Scoped`] trait exposes those keys
//! uniformly.

pub mod dates;
pub mod department;
pub mod error;
pub mod id;
pub mod records;

pub use department::Department;
pub use error::{CoreError, Result};
pub use id::{IdError, validate_id};
pub use records::{
    ActivityItem, ActivityKind, Appointment, AppointmentStatus, Consultation, ConsultationStatus,
    Emr, EmrStatus, Gender, LabOrder, LabOrderStatus, LabPriority, LabResult, Patient,
    PatientStatus, RecordKind, ResultFlag, Scoped, TriageLevel,
};
