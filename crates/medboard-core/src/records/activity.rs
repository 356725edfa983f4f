use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{RecordKind, Scoped};
use crate::department::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Admission,
    Discharge,
    LabResult,
    Prescription,
    Appointment,
    Note,
}

/// Entry in the dashboard's recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    pub kind: ActivityKind,
    pub message: String,
    /// Staff member who produced the event, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

impl Scoped for ActivityItem {
    const KIND: RecordKind = RecordKind::Activity;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn doctor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    fn department(&self) -> Option<&Department> {
        self.department.as_ref()
    }
}
