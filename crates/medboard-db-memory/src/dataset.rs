//! The fixture document.

use serde::{Deserialize, Serialize};

use medboard_auth::Account;
use medboard_core::{
    ActivityItem, Appointment, Consultation, Emr, LabOrder, LabResult, Patient,
};

/// Every collection the dashboard reads. Missing arrays are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub patients: Vec<Patient>,
    pub emrs: Vec<Emr>,
    pub lab_orders: Vec<LabOrder>,
    pub lab_results: Vec<LabResult>,
    pub consultations: Vec<Consultation>,
    pub appointments: Vec<Appointment>,
    pub activity: Vec<ActivityItem>,
    pub accounts: Vec<Account>,
}
