use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use time::format_description::well_known::Rfc3339;

use medboard_auth::DenyReason;
use medboard_core::{
    ActivityItem, Appointment, Consultation, Emr, LabOrder, LabResult, Patient, ResultFlag,
};

use crate::cli::OutputFormat;

/// A record that can be shown as a table row.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn print_access_denied(reason: &DenyReason) {
    println!("{}", "Access Denied".red().bold());
    println!("{}", reason.message.dimmed());
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a filtered record list.
pub fn print_records<R: Serialize + TableRow>(
    records: &[&R],
    format: OutputFormat,
    noun: &str,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(records),
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No {noun} to show.");
                return Ok(());
            }
            let mut builder = Builder::default();
            builder.push_record(R::HEADERS.iter().copied());
            for record in records {
                builder.push_record(record.cells());
            }
            let table = builder.build().with(Style::rounded()).to_string();
            println!("{table}");
            println!("Total: {}", records.len());
            Ok(())
        }
    }
}

/// Prints label/value pairs as a two-column table.
pub fn print_pairs(header: [&str; 2], pairs: &[(String, String)]) {
    let mut builder = Builder::default();
    builder.push_record(header);
    for (label, value) in pairs {
        builder.push_record([label.as_str(), value.as_str()]);
    }
    println!("{}", builder.build().with(Style::rounded()));
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn timestamp(at: time::OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_else(|_| at.to_string())
}

/// Serde tag of a unit enum variant, e.g. `in-progress`.
fn tag<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => "-".to_string(),
    }
}

impl TableRow for Patient {
    const HEADERS: &'static [&'static str] = &[
        "ID", "MRN", "Name", "Gender", "Born", "Doctor", "Department", "Status", "Triage",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.mrn.clone(),
            self.name.clone(),
            tag(&self.gender),
            self.birth_date.to_string(),
            self.doctor_id.clone(),
            self.department.to_string(),
            tag(&self.status),
            self.triage_level
                .map_or_else(|| "-".to_string(), |level| level.value().to_string()),
        ]
    }
}

impl TableRow for Emr {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Patient", "Doctor", "Department", "Status", "Created", "Summary",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.patient_id.clone(),
            self.doctor_id.clone(),
            self.department.to_string(),
            tag(&self.status),
            self.created_on.to_string(),
            self.summary.clone(),
        ]
    }
}

impl TableRow for LabOrder {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Patient", "Doctor", "Department", "Test", "Priority", "Status", "Ordered",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.patient_id.clone(),
            self.doctor_id.clone(),
            self.department.to_string(),
            self.test.clone(),
            tag(&self.priority),
            tag(&self.status),
            self.ordered_on.to_string(),
        ]
    }
}

impl TableRow for LabResult {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Order", "Patient", "Test", "Value", "Flag", "Reported",
    ];

    fn cells(&self) -> Vec<String> {
        let value = match &self.unit {
            Some(unit) => format!("{} {unit}", self.value),
            None => self.value.clone(),
        };
        let flag = match self.flag {
            ResultFlag::Critical => tag(&self.flag).red().bold().to_string(),
            ResultFlag::Abnormal => tag(&self.flag).yellow().to_string(),
            ResultFlag::Normal => tag(&self.flag),
        };
        vec![
            self.id.clone(),
            self.order_id.clone(),
            self.patient_id.clone(),
            self.test.clone(),
            value,
            flag,
            self.reported_on.to_string(),
        ]
    }
}

impl TableRow for Consultation {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Patient", "Doctor", "Department", "Scheduled", "Status", "Reason",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.patient_id.clone(),
            self.doctor_id.clone(),
            self.department.to_string(),
            self.scheduled_on.to_string(),
            tag(&self.status),
            self.reason.clone(),
        ]
    }
}

impl TableRow for Appointment {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Patient", "Doctor", "Department", "Starts", "Status",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.patient_id.clone(),
            self.doctor_id.clone(),
            self.department.to_string(),
            timestamp(self.starts_at),
            tag(&self.status),
        ]
    }
}

impl TableRow for ActivityItem {
    const HEADERS: &'static [&'static str] = &["ID", "When", "Kind", "Message", "Actor", "Department"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            timestamp(self.at),
            tag(&self.kind),
            self.message.clone(),
            or_dash(self.actor_id.as_deref()),
            or_dash(self.department.as_ref().map(|d| d.as_str())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medboard_core::{LabOrderStatus, LabPriority};

    #[test]
    fn test_tag_uses_serde_names() {
        assert_eq!(tag(&LabOrderStatus::InProgress), "in-progress");
        assert_eq!(tag(&LabPriority::Stat), "stat");
    }

    #[test]
    fn test_row_widths_match_headers() {
        let demo = medboard_db_memory::ClinicalStore::demo().unwrap();
        assert_eq!(demo.patients()[0].cells().len(), Patient::HEADERS.len());
        assert_eq!(demo.emrs()[0].cells().len(), Emr::HEADERS.len());
        assert_eq!(demo.lab_orders()[0].cells().len(), LabOrder::HEADERS.len());
        assert_eq!(demo.lab_results()[0].cells().len(), LabResult::HEADERS.len());
        assert_eq!(
            demo.consultations()[0].cells().len(),
            Consultation::HEADERS.len()
        );
        assert_eq!(
            demo.appointments()[0].cells().len(),
            Appointment::HEADERS.len()
        );
        assert_eq!(demo.activity()[0].cells().len(), ActivityItem::HEADERS.len());
    }
}
