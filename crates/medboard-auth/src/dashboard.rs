//! Role-specific dashboard statistics.
//!
//! Every count is taken over the lists the [`AccessFilter`] returns for the
//! user, so a stat can never reveal records the user could not list. The one
//! exception is [`gender_distribution`], which is hospital-wide.

use serde::Serialize;

use medboard_core::{AppointmentStatus, Gender, LabOrderStatus, Patient, PatientStatus, TriageLevel};

use crate::policy::{AccessFilter, RecordSet};
use crate::types::{Permission, Role, User};

/// Dashboard counts, one variant per stats scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "scope",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum DashboardStats {
    Administrator {
        total_patients: usize,
        admitted_patients: usize,
        critical_patients: usize,
        pending_emrs: usize,
        open_lab_orders: usize,
        critical_results: usize,
        upcoming_appointments: usize,
    },
    Doctor {
        my_patients: usize,
        critical_patients: usize,
        pending_emrs: usize,
        open_lab_orders: usize,
        critical_results: usize,
        upcoming_consultations: usize,
        upcoming_appointments: usize,
    },
    Nurse {
        department_patients: usize,
        critical_patients: usize,
        awaiting_triage: usize,
        upcoming_appointments: usize,
        open_lab_orders: usize,
    },
    /// Auxiliary nurses.
    Triage {
        department_patients: usize,
        awaiting_triage: usize,
        /// Patients per triage level, index 0 is level 1.
        by_level: [usize; 5],
        critical_patients: usize,
    },
    /// Lab technicians.
    Laboratory {
        open_orders: usize,
        urgent_orders: usize,
        completed_orders: usize,
        critical_results: usize,
    },
    /// Receptionists.
    FrontDesk {
        total_patients: usize,
        upcoming_appointments: usize,
        checked_in: usize,
        cancelled_appointments: usize,
    },
    /// Accountants.
    Billing {
        total_patients: usize,
        discharged_patients: usize,
    },
    /// Radiologists and pharmacists.
    ActivityOnly { recent_activity: usize },
    /// No user, or a role without a dashboard.
    Unavailable,
}

impl DashboardStats {
    /// Labelled counts in display order. Empty for `Unavailable`.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, usize)> {
        fn pairs(items: &[(&str, usize)]) -> Vec<(String, usize)> {
            items
                .iter()
                .map(|(label, count)| ((*label).to_string(), *count))
                .collect()
        }

        match *self {
            Self::Administrator {
                total_patients,
                admitted_patients,
                critical_patients,
                pending_emrs,
                open_lab_orders,
                critical_results,
                upcoming_appointments,
            } => pairs(&[
                ("Total patients", total_patients),
                ("Admitted patients", admitted_patients),
                ("Critical patients", critical_patients),
                ("Pending EMRs", pending_emrs),
                ("Open lab orders", open_lab_orders),
                ("Critical results", critical_results),
                ("Upcoming appointments", upcoming_appointments),
            ]),
            Self::Doctor {
                my_patients,
                critical_patients,
                pending_emrs,
                open_lab_orders,
                critical_results,
                upcoming_consultations,
                upcoming_appointments,
            } => pairs(&[
                ("My patients", my_patients),
                ("Critical patients", critical_patients),
                ("Pending EMRs", pending_emrs),
                ("Open lab orders", open_lab_orders),
                ("Critical results", critical_results),
                ("Upcoming consultations", upcoming_consultations),
                ("Upcoming appointments", upcoming_appointments),
            ]),
            Self::Nurse {
                department_patients,
                critical_patients,
                awaiting_triage,
                upcoming_appointments,
                open_lab_orders,
            } => pairs(&[
                ("Department patients", department_patients),
                ("Critical patients", critical_patients),
                ("Awaiting triage", awaiting_triage),
                ("Upcoming appointments", upcoming_appointments),
                ("Open lab orders", open_lab_orders),
            ]),
            Self::Triage {
                department_patients,
                awaiting_triage,
                by_level,
                critical_patients,
            } => {
                let mut entries = pairs(&[
                    ("Department patients", department_patients),
                    ("Awaiting triage", awaiting_triage),
                    ("Critical patients", critical_patients),
                ]);
                entries.extend(
                    by_level
                        .iter()
                        .enumerate()
                        .map(|(i, count)| (format!("Triage level {}", i + 1), *count)),
                );
                entries
            }
            Self::Laboratory {
                open_orders,
                urgent_orders,
                completed_orders,
                critical_results,
            } => pairs(&[
                ("Open orders", open_orders),
                ("Urgent orders", urgent_orders),
                ("Completed orders", completed_orders),
                ("Critical results", critical_results),
            ]),
            Self::FrontDesk {
                total_patients,
                upcoming_appointments,
                checked_in,
                cancelled_appointments,
            } => pairs(&[
                ("Total patients", total_patients),
                ("Upcoming appointments", upcoming_appointments),
                ("Checked in", checked_in),
                ("Cancelled appointments", cancelled_appointments),
            ]),
            Self::Billing {
                total_patients,
                discharged_patients,
            } => pairs(&[
                ("Total patients", total_patients),
                ("Discharged patients", discharged_patients),
            ]),
            Self::ActivityOnly { recent_activity } => {
                pairs(&[("Recent activity", recent_activity)])
            }
            Self::Unavailable => Vec::new(),
        }
    }
}

/// Computes the stats for `user` over `records`.
#[must_use]
pub fn get_dashboard_stats_for_user(user: Option<&User>, records: RecordSet<'_>) -> DashboardStats {
    AccessFilter::new(user, records).dashboard_stats()
}

impl AccessFilter<'_> {
    /// Stats for the filter's user. See [`DashboardStats`].
    #[must_use]
    pub fn dashboard_stats(&self) -> DashboardStats {
        let Some(user) = self.user() else {
            return DashboardStats::Unavailable;
        };
        let records = self.records();

        let count = |pred: fn(&Patient) -> bool, patients: &[&Patient]| {
            patients.iter().filter(|p| pred(p)).count()
        };

        match user.role {
            Role::Administrator => {
                let patients = self.filter_patients_by_user();
                DashboardStats::Administrator {
                    total_patients: patients.len(),
                    admitted_patients: count(Patient::is_admitted, &patients),
                    critical_patients: count(Patient::is_critical, &patients),
                    pending_emrs: self.pending_emrs(),
                    open_lab_orders: self.open_lab_orders(),
                    critical_results: self.critical_results(),
                    upcoming_appointments: self.upcoming_appointments(),
                }
            }
            Role::Doctor => {
                let patients = self.filter_patients_by_user();
                DashboardStats::Doctor {
                    my_patients: patients.len(),
                    critical_patients: count(Patient::is_critical, &patients),
                    pending_emrs: self.pending_emrs(),
                    open_lab_orders: self.open_lab_orders(),
                    critical_results: self.critical_results(),
                    upcoming_consultations: self
                        .filter_consultations_by_user(records.consultations)
                        .iter()
                        .filter(|c| c.is_upcoming())
                        .count(),
                    upcoming_appointments: self.upcoming_appointments(),
                }
            }
            Role::Nurse => {
                let patients = self.filter_patients_by_user();
                DashboardStats::Nurse {
                    department_patients: patients.len(),
                    critical_patients: count(Patient::is_critical, &patients),
                    awaiting_triage: count(Patient::awaiting_triage, &patients),
                    upcoming_appointments: self.upcoming_appointments(),
                    open_lab_orders: self.open_lab_orders(),
                }
            }
            Role::AuxiliaryNurse => {
                let patients = self.filter_patients_by_user();
                let mut by_level = [0usize; 5];
                for level in patients.iter().filter_map(|p| p.triage_level) {
                    by_level[usize::from(level.value() - TriageLevel::MOST_URGENT)] += 1;
                }
                DashboardStats::Triage {
                    department_patients: patients.len(),
                    awaiting_triage: count(Patient::awaiting_triage, &patients),
                    by_level,
                    critical_patients: count(Patient::is_critical, &patients),
                }
            }
            Role::LabTechnician => {
                let orders = self.filter_lab_orders_by_user(records.lab_orders);
                DashboardStats::Laboratory {
                    open_orders: orders.iter().filter(|o| o.is_open()).count(),
                    urgent_orders: orders
                        .iter()
                        .filter(|o| o.is_open() && o.is_urgent())
                        .count(),
                    completed_orders: orders
                        .iter()
                        .filter(|o| o.status == LabOrderStatus::Completed)
                        .count(),
                    critical_results: self.critical_results(),
                }
            }
            Role::Receptionist => {
                let appointments = self.filter_appointments_by_user(records.appointments);
                let with_status = |status: AppointmentStatus| {
                    appointments.iter().filter(|a| a.status == status).count()
                };
                DashboardStats::FrontDesk {
                    total_patients: self.filter_patients_by_user().len(),
                    upcoming_appointments: appointments.iter().filter(|a| a.is_upcoming()).count(),
                    checked_in: with_status(AppointmentStatus::CheckedIn),
                    cancelled_appointments: with_status(AppointmentStatus::Cancelled),
                }
            }
            Role::Accountant => {
                let patients = self.filter_patients_by_user();
                DashboardStats::Billing {
                    total_patients: patients.len(),
                    discharged_patients: patients
                        .iter()
                        .filter(|p| p.status == PatientStatus::Discharged)
                        .count(),
                }
            }
            Role::Radiologist | Role::Pharmacist => DashboardStats::ActivityOnly {
                recent_activity: self.filter_activity_by_user(records.activity).len(),
            },
            Role::Unrecognized => DashboardStats::Unavailable,
        }
    }

    fn pending_emrs(&self) -> usize {
        self.filter_emrs_by_user(self.records().emrs)
            .iter()
            .filter(|emr| emr.is_pending())
            .count()
    }

    fn open_lab_orders(&self) -> usize {
        self.filter_lab_orders_by_user(self.records().lab_orders)
            .iter()
            .filter(|order| order.is_open())
            .count()
    }

    fn critical_results(&self) -> usize {
        self.filter_lab_results_by_user(self.records().lab_results)
            .iter()
            .filter(|result| result.is_critical())
            .count()
    }

    fn upcoming_appointments(&self) -> usize {
        self.filter_appointments_by_user(self.records().appointments)
            .iter()
            .filter(|appointment| appointment.is_upcoming())
            .count()
    }
}

/// Patients per gender over the whole hospital, in [`Gender::ALL`] order.
///
/// Not role-filtered: any authenticated user with `dashboard:view` gets the
/// hospital-wide figure. Everyone else gets an empty list.
#[must_use]
pub fn gender_distribution(user: Option<&User>, patients: &[Patient]) -> Vec<(Gender, usize)> {
    if !crate::types::has_permission(user, Permission::DashboardView) {
        return Vec::new();
    }
    Gender::ALL
        .into_iter()
        .map(|gender| {
            let count = patients.iter().filter(|p| p.gender == gender).count();
            (gender, count)
        })
        .collect()
}
