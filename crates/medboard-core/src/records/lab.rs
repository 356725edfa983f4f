use serde::{Deserialize, Serialize};
use time::Date;

use super::{RecordKind, Scoped};
use crate::dates::iso_date;
use crate::department::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabPriority {
    Routine,
    Urgent,
    Stat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabOrderStatus {
    Ordered,
    Collected,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabOrder {
    pub id: String,
    pub patient_id: String,
    /// Ordering doctor.
    pub doctor_id: String,
    pub department: Department,
    pub test: String,
    pub priority: LabPriority,
    pub status: LabOrderStatus,
    #[serde(with = "iso_date")]
    pub ordered_on: Date,
}

impl LabOrder {
    /// Ordered but neither completed nor cancelled.
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            LabOrderStatus::Ordered | LabOrderStatus::Collected | LabOrderStatus::InProgress
        )
    }

    pub fn is_urgent(&self) -> bool {
        matches!(self.priority, LabPriority::Urgent | LabPriority::Stat)
    }
}

impl Scoped for LabOrder {
    const KIND: RecordKind = RecordKind::LabOrder;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultFlag {
    Normal,
    Abnormal,
    Critical,
}

/// Reported value for a lab order.
///
/// Results carry no doctor or department of their own; they are reached
/// through their patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    pub id: String,
    pub order_id: String,
    pub patient_id: String,
    pub test: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub flag: ResultFlag,
    #[serde(with = "iso_date")]
    pub reported_on: Date,
}

impl LabResult {
    pub fn is_critical(&self) -> bool {
        self.flag == ResultFlag::Critical
    }
}

impl Scoped for LabResult {
    const KIND: RecordKind = RecordKind::LabResult;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn patient_id(&self) -> Option<&str> {
        Some(&self.patient_id)
    }
}
