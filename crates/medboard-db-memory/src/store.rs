use std::collections::{HashMap, HashSet};
use std::path::Path;

use medboard_auth::{Account, AuthResult, RecordSet, UserDirectory};
use medboard_core::{
    ActivityItem, Appointment, Consultation, CoreError, Emr, LabOrder, LabResult, Patient,
    RecordKind, Result, Scoped, validate_id,
};

use crate::dataset::Dataset;

const DEMO_FIXTURE: &str = include_str!("../fixtures/demo.json");

/// A validated, read-only data set.
///
/// Construction checks that every id is well-formed and unique within its
/// kind, and that every patient and lab order reference resolves.
#[derive(Debug, Clone)]
pub struct ClinicalStore {
    data: Dataset,
    patient_index: HashMap<String, usize>,
    emr_index: HashMap<String, usize>,
}

impl ClinicalStore {
    /// Validates a data set and indexes it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId`, `DuplicateRecord`, `DanglingReference` or
    /// `InvalidRecord` describing the first problem found.
    pub fn from_dataset(data: Dataset) -> Result<Self> {
        validate(&data)?;

        let patient_index = index(&data.patients);
        let emr_index = index(&data.emrs);

        tracing::debug!(
            patients = data.patients.len(),
            emrs = data.emrs.len(),
            lab_orders = data.lab_orders.len(),
            lab_results = data.lab_results.len(),
            consultations = data.consultations.len(),
            appointments = data.appointments.len(),
            activity = data.activity.len(),
            accounts = data.accounts.len(),
            "clinical store loaded"
        );

        Ok(Self {
            data,
            patient_index,
            emr_index,
        })
    }

    /// Parses and validates a JSON fixture document.
    ///
    /// # Errors
    ///
    /// Returns `JsonError` on malformed JSON, otherwise as
    /// [`from_dataset`](Self::from_dataset).
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_dataset(serde_json::from_str(json)?)
    }

    /// Reads a JSON fixture file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as
    /// [`from_json`](Self::from_json).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading fixtures");
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// The bundled demo data set.
    ///
    /// # Errors
    ///
    /// Only if the bundled fixture is itself invalid.
    pub fn demo() -> Result<Self> {
        Self::from_json(DEMO_FIXTURE)
    }

    /// Borrowed views for an [`AccessFilter`](medboard_auth::AccessFilter).
    #[must_use]
    pub fn record_set(&self) -> RecordSet<'_> {
        RecordSet {
            patients: &self.data.patients,
            emrs: &self.data.emrs,
            lab_orders: &self.data.lab_orders,
            lab_results: &self.data.lab_results,
            consultations: &self.data.consultations,
            appointments: &self.data.appointments,
            activity: &self.data.activity,
        }
    }

    #[must_use]
    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patient_index.get(id).map(|&i| &self.data.patients[i])
    }

    #[must_use]
    pub fn emr(&self, id: &str) -> Option<&Emr> {
        self.emr_index.get(id).map(|&i| &self.data.emrs[i])
    }

    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        &self.data.patients
    }

    #[must_use]
    pub fn emrs(&self) -> &[Emr] {
        &self.data.emrs
    }

    #[must_use]
    pub fn lab_orders(&self) -> &[LabOrder] {
        &self.data.lab_orders
    }

    #[must_use]
    pub fn lab_results(&self) -> &[LabResult] {
        &self.data.lab_results
    }

    #[must_use]
    pub fn consultations(&self) -> &[Consultation] {
        &self.data.consultations
    }

    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        &self.data.appointments
    }

    #[must_use]
    pub fn activity(&self) -> &[ActivityItem] {
        &self.data.activity
    }

    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.data.accounts
    }

    /// Builds the login directory from the account list.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` or `PasswordHash`.
    pub fn user_directory(&self) -> AuthResult<UserDirectory> {
        UserDirectory::from_accounts(&self.data.accounts)
    }
}

fn index<R: Scoped>(records: &[R]) -> HashMap<String, usize> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| (record.record_id().to_string(), i))
        .collect()
}

/// Checks id shape and uniqueness for one kind, returning the id set.
fn unique_ids<R: Scoped>(records: &[R]) -> Result<HashSet<&str>> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let id = record.record_id();
        validate_id(id).map_err(|e| CoreError::invalid_id(format!("{}: {e}", R::KIND)))?;
        if !seen.insert(id) {
            return Err(CoreError::duplicate_record(R::KIND, id));
        }
    }
    Ok(seen)
}

fn require_patient_ref<R: Scoped>(record: &R, patients: &HashSet<&str>) -> Result<()> {
    match record.patient_id() {
        Some(patient_id) if !patients.contains(patient_id) => Err(CoreError::dangling_reference(
            R::KIND,
            record.record_id(),
            format!("patient/{patient_id}"),
        )),
        _ => Ok(()),
    }
}

fn validate(data: &Dataset) -> Result<()> {
    let patients = unique_ids(&data.patients)?;
    unique_ids(&data.emrs)?;
    unique_ids(&data.lab_results)?;
    unique_ids(&data.consultations)?;
    unique_ids(&data.appointments)?;
    unique_ids(&data.activity)?;
    unique_ids(&data.lab_orders)?;

    let orders: HashMap<&str, &LabOrder> = data
        .lab_orders
        .iter()
        .map(|order| (order.id.as_str(), order))
        .collect();

    for emr in &data.emrs {
        require_patient_ref(emr, &patients)?;
    }
    for order in &data.lab_orders {
        require_patient_ref(order, &patients)?;
    }
    for consultation in &data.consultations {
        require_patient_ref(consultation, &patients)?;
    }
    for appointment in &data.appointments {
        require_patient_ref(appointment, &patients)?;
    }
    for result in &data.lab_results {
        require_patient_ref(result, &patients)?;

        let Some(order) = orders.get(result.order_id.as_str()) else {
            return Err(CoreError::dangling_reference(
                RecordKind::LabResult,
                &result.id,
                format!("lab-order/{}", result.order_id),
            ));
        };
        if order.patient_id != result.patient_id {
            return Err(CoreError::invalid_record(format!(
                "lab-result/{} is for patient {} but its order {} is for patient {}",
                result.id, result.patient_id, order.id, order.patient_id
            )));
        }
    }

    for account in &data.accounts {
        validate_id(&account.user.id)
            .map_err(|e| CoreError::invalid_id(format!("account: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(extra: serde_json::Value) -> String {
        let mut doc = serde_json::json!({
            "patients": [{
                "id": "p1",
                "mrn": "MRN-1",
                "name": "Ada Lovelace",
                "gender": "female",
                "birthDate": "1985-12-10",
                "doctorId": "d1",
                "department": "Cardiology",
                "status": "admitted"
            }]
        });
        if let (Some(doc), Some(extra)) = (doc.as_object_mut(), extra.as_object()) {
            doc.extend(extra.clone());
        }
        doc.to_string()
    }

    #[test]
    fn test_minimal_document() {
        let store = ClinicalStore::from_json(&document(serde_json::json!({}))).unwrap();
        assert_eq!(store.patients().len(), 1);
        assert!(store.emrs().is_empty());
        assert_eq!(store.patient("p1").unwrap().name, "Ada Lovelace");
        assert!(store.patient("p2").is_none());
    }

    #[test]
    fn test_duplicate_patient() {
        let json = serde_json::json!({
            "patients": [
                {"id": "p1", "mrn": "1", "name": "A", "gender": "male", "birthDate": "1990-01-01",
                 "doctorId": "d1", "department": "ER", "status": "outpatient"},
                {"id": "p1", "mrn": "2", "name": "B", "gender": "male", "birthDate": "1990-01-01",
                 "doctorId": "d1", "department": "ER", "status": "outpatient"}
            ]
        });
        let err = ClinicalStore::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::DuplicateRecord {
                kind: RecordKind::Patient,
                ..
            }
        ));
    }

    #[test]
    fn test_dangling_emr_patient() {
        let json = document(serde_json::json!({
            "emrs": [{
                "id": "e1", "patientId": "p9", "doctorId": "d1", "department": "Cardiology",
                "status": "draft", "createdOn": "2024-01-01", "summary": ""
            }]
        }));
        let err = ClinicalStore::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            CoreError::DanglingReference {
                kind: RecordKind::Emr,
                ..
            }
        ));
        assert!(err.to_string().contains("patient/p9"));
    }

    #[test]
    fn test_result_without_order() {
        let json = document(serde_json::json!({
            "labResults": [{
                "id": "r1", "orderId": "o1", "patientId": "p1", "test": "CBC",
                "value": "5", "flag": "normal", "reportedOn": "2024-01-02"
            }]
        }));
        let err = ClinicalStore::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("lab-order/o1"));
    }

    #[test]
    fn test_malformed_id() {
        let json = document(serde_json::json!({
            "consultations": [{
                "id": "c 1", "patientId": "p1", "doctorId": "d1", "department": "Cardiology",
                "scheduledOn": "2024-01-05", "status": "scheduled", "reason": "Chest pain"
            }]
        }));
        assert!(matches!(
            ClinicalStore::from_json(&json),
            Err(CoreError::InvalidId(_))
        ));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            ClinicalStore::from_json("{"),
            Err(CoreError::JsonError(_))
        ));
    }
}
