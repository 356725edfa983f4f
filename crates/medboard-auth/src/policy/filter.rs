//! Applies the visibility table to record slices.
//!
//! Every filter returns references into its input, in input order. No user
//! means an empty result.

use std::collections::HashSet;

use medboard_core::{
    ActivityItem, Appointment, Consultation, Emr, LabOrder, LabResult, Patient, Scoped,
};

use super::visibility::{Visibility, visibility_for};
use crate::types::{Permission, User};

/// Borrowed views of every record collection.
///
/// The patient list is needed even when filtering other kinds, since
/// some rules join through the patients a user can see.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordSet<'a> {
    pub patients: &'a [Patient],
    pub emrs: &'a [Emr],
    pub lab_orders: &'a [LabOrder],
    pub lab_results: &'a [LabResult],
    pub consultations: &'a [Consultation],
    pub appointments: &'a [Appointment],
    pub activity: &'a [ActivityItem],
}

/// Record filtering for one (possibly absent) user.
#[derive(Debug, Clone, Copy)]
pub struct AccessFilter<'a> {
    user: Option<&'a User>,
    records: RecordSet<'a>,
}

impl<'a> AccessFilter<'a> {
    #[must_use]
    pub fn new(user: Option<&'a User>, records: RecordSet<'a>) -> Self {
        Self { user, records }
    }

    #[must_use]
    pub fn user(&self) -> Option<&'a User> {
        self.user
    }

    #[must_use]
    pub fn records(&self) -> RecordSet<'a> {
        self.records
    }

    /// Permission check for the filter's user; `false` without one.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        crate::types::has_permission(self.user, permission)
    }

    /// Filters any record kind by the user's visibility rule for it.
    #[must_use]
    pub fn filter_records<R: Scoped>(&self, records: &'a [R]) -> Vec<&'a R> {
        let Some(user) = self.user else {
            return Vec::new();
        };

        let visibility = visibility_for(R::KIND, user.role);
        let visible: Vec<&'a R> = match visibility {
            Visibility::All => records.iter().collect(),
            Visibility::Nothing => Vec::new(),
            Visibility::VisiblePatients => {
                let patients: HashSet<&str> = self
                    .filter_patients_by_user()
                    .into_iter()
                    .map(|patient| patient.id.as_str())
                    .collect();
                records
                    .iter()
                    .filter(|record| record.patient_id().is_some_and(|id| patients.contains(id)))
                    .collect()
            }
            rule => records
                .iter()
                .filter(|record| rule.admits(*record, user))
                .collect(),
        };

        tracing::debug!(
            kind = %R::KIND,
            role = %user.role,
            ?visibility,
            visible = visible.len(),
            total = records.len(),
            "records filtered"
        );
        visible
    }

    /// Patients from the record set the user may see.
    #[must_use]
    pub fn filter_patients_by_user(&self) -> Vec<&'a Patient> {
        self.filter_records(self.records.patients)
    }

    #[must_use]
    pub fn filter_emrs_by_user(&self, emrs: &'a [Emr]) -> Vec<&'a Emr> {
        self.filter_records(emrs)
    }

    #[must_use]
    pub fn filter_lab_orders_by_user(&self, orders: &'a [LabOrder]) -> Vec<&'a LabOrder> {
        self.filter_records(orders)
    }

    #[must_use]
    pub fn filter_lab_results_by_user(&self, results: &'a [LabResult]) -> Vec<&'a LabResult> {
        self.filter_records(results)
    }

    #[must_use]
    pub fn filter_consultations_by_user(
        &self,
        consultations: &'a [Consultation],
    ) -> Vec<&'a Consultation> {
        self.filter_records(consultations)
    }

    #[must_use]
    pub fn filter_appointments_by_user(
        &self,
        appointments: &'a [Appointment],
    ) -> Vec<&'a Appointment> {
        self.filter_records(appointments)
    }

    #[must_use]
    pub fn filter_activity_by_user(&self, activity: &'a [ActivityItem]) -> Vec<&'a ActivityItem> {
        self.filter_records(activity)
    }

    #[must_use]
    pub fn can_user_view_patient(&self, patient_id: &str) -> bool {
        self.filter_patients_by_user()
            .iter()
            .any(|patient| patient.id == patient_id)
    }

    #[must_use]
    pub fn can_user_view_emr(&self, emr_id: &str, emrs: &'a [Emr]) -> bool {
        self.filter_emrs_by_user(emrs)
            .iter()
            .any(|emr| emr.id == emr_id)
    }
}
