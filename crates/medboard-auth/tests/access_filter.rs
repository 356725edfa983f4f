//! Record filtering across roles.

use medboard_auth::prelude::*;
use medboard_core::{
    ActivityItem, ActivityKind, Appointment, AppointmentStatus, Consultation, ConsultationStatus,
    Emr, EmrStatus, Gender, LabOrder, LabOrderStatus, LabPriority, LabResult, Patient,
    PatientStatus, ResultFlag, TriageLevel,
};
use time::macros::{date, datetime};

struct Ward {
    patients: Vec<Patient>,
    emrs: Vec<Emr>,
    lab_orders: Vec<LabOrder>,
    lab_results: Vec<LabResult>,
    consultations: Vec<Consultation>,
    appointments: Vec<Appointment>,
    activity: Vec<ActivityItem>,
}

impl Ward {
    fn records(&self) -> RecordSet<'_> {
        RecordSet {
            patients: &self.patients,
            emrs: &self.emrs,
            lab_orders: &self.lab_orders,
            lab_results: &self.lab_results,
            consultations: &self.consultations,
            appointments: &self.appointments,
            activity: &self.activity,
        }
    }
}

fn patient(
    id: &str,
    doctor: &str,
    department: &str,
    gender: Gender,
    status: PatientStatus,
    triage: Option<u8>,
) -> Patient {
    Patient {
        id: id.to_string(),
        mrn: format!("MRN-{id}"),
        name: format!("Patient {id}"),
        gender,
        birth_date: date!(1975 - 06 - 15),
        doctor_id: doctor.to_string(),
        department: department.into(),
        status,
        triage_level: triage.map(|level| TriageLevel::try_from(level).unwrap()),
    }
}

fn emr(id: &str, patient: &str, doctor: &str, status: EmrStatus) -> Emr {
    Emr {
        id: id.to_string(),
        patient_id: patient.to_string(),
        doctor_id: doctor.to_string(),
        department: "Cardiology".into(),
        status,
        created_on: date!(2024 - 03 - 01),
        summary: String::new(),
    }
}

fn lab_order(id: &str, patient: &str, doctor: &str, department: &str, status: LabOrderStatus) -> LabOrder {
    LabOrder {
        id: id.to_string(),
        patient_id: patient.to_string(),
        doctor_id: doctor.to_string(),
        department: department.into(),
        test: "CBC".to_string(),
        priority: LabPriority::Stat,
        status,
        ordered_on: date!(2024 - 03 - 02),
    }
}

fn lab_result(id: &str, order: &str, patient: &str, flag: ResultFlag) -> LabResult {
    LabResult {
        id: id.to_string(),
        order_id: order.to_string(),
        patient_id: patient.to_string(),
        test: "CBC".to_string(),
        value: "4.2".to_string(),
        unit: None,
        flag,
        reported_on: date!(2024 - 03 - 03),
    }
}

fn consultation(id: &str, patient: &str, doctor: &str) -> Consultation {
    Consultation {
        id: id.to_string(),
        patient_id: patient.to_string(),
        doctor_id: doctor.to_string(),
        department: "Cardiology".into(),
        scheduled_on: date!(2024 - 04 - 01),
        status: ConsultationStatus::Scheduled,
        reason: "Follow-up".to_string(),
    }
}

fn appointment(id: &str, patient: &str, doctor: &str, department: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: id.to_string(),
        patient_id: patient.to_string(),
        doctor_id: doctor.to_string(),
        department: department.into(),
        starts_at: datetime!(2024-04-02 09:30 UTC),
        status,
    }
}

fn activity(id: &str, actor: Option<&str>, department: Option<&str>) -> ActivityItem {
    ActivityItem {
        id: id.to_string(),
        kind: ActivityKind::Note,
        message: format!("activity {id}"),
        actor_id: actor.map(str::to_string),
        department: department.map(Into::into),
        at: datetime!(2024-04-02 10:00 UTC),
    }
}

fn ward() -> Ward {
    Ward {
        patients: vec![
            patient("p1", "d1", "Cardiology", Gender::Female, PatientStatus::Critical, Some(1)),
            patient("p2", "d2", "Emergency", Gender::Male, PatientStatus::Admitted, None),
            patient("p3", "d1", "Cardiology", Gender::Male, PatientStatus::Discharged, None),
            patient("p4", "d2", "Emergency", Gender::Other, PatientStatus::Outpatient, Some(3)),
        ],
        emrs: vec![
            emr("e1", "p1", "d1", EmrStatus::Draft),
            emr("e2", "p2", "d2", EmrStatus::Pending),
            emr("e3", "p3", "d2", EmrStatus::Signed),
        ],
        lab_orders: vec![
            lab_order("o1", "p1", "d1", "Cardiology", LabOrderStatus::Ordered),
            lab_order("o2", "p2", "d2", "Emergency", LabOrderStatus::Completed),
            lab_order("o3", "p4", "d2", "Emergency", LabOrderStatus::InProgress),
        ],
        lab_results: vec![
            lab_result("r1", "o1", "p1", ResultFlag::Critical),
            lab_result("r2", "o2", "p2", ResultFlag::Critical),
        ],
        consultations: vec![
            consultation("c1", "p1", "d1"),
            consultation("c2", "p2", "d2"),
            consultation("c3", "p3", "d1"),
        ],
        appointments: vec![
            appointment("a1", "p1", "d1", "Cardiology", AppointmentStatus::Booked),
            appointment("a2", "p2", "d2", "Emergency", AppointmentStatus::CheckedIn),
            appointment("a3", "p4", "d2", "Emergency", AppointmentStatus::Cancelled),
        ],
        activity: vec![
            activity("act1", Some("d1"), None),
            activity("act2", None, Some("Cardiology")),
            activity("act3", Some("n1"), Some("Emergency")),
            activity("act4", None, None),
        ],
    }
}

fn ids<T, F: Fn(&T) -> &str>(records: &[&T], id: F) -> Vec<String> {
    records.iter().map(|r| id(*r).to_string()).collect()
}

#[test]
fn test_administrator_sees_everything_in_order() {
    let ward = ward();
    let admin = User::builder("a1", "root", Role::Administrator).build();
    let filter = AccessFilter::new(Some(&admin), ward.records());

    assert_eq!(
        ids(&filter.filter_patients_by_user(), |p| &p.id),
        ["p1", "p2", "p3", "p4"]
    );
    assert_eq!(filter.filter_emrs_by_user(&ward.emrs).len(), ward.emrs.len());
    assert_eq!(
        filter.filter_lab_orders_by_user(&ward.lab_orders).len(),
        ward.lab_orders.len()
    );
    assert_eq!(
        filter.filter_lab_results_by_user(&ward.lab_results).len(),
        ward.lab_results.len()
    );
    assert_eq!(
        filter.filter_consultations_by_user(&ward.consultations).len(),
        ward.consultations.len()
    );
    assert_eq!(
        filter.filter_appointments_by_user(&ward.appointments).len(),
        ward.appointments.len()
    );
    assert_eq!(
        ids(&filter.filter_activity_by_user(&ward.activity), |a| &a.id),
        ["act1", "act2", "act3", "act4"]
    );
}

#[test]
fn test_doctor_sees_only_assigned_patients() {
    let ward = ward();
    let doctor = User::builder("d1", "house", Role::Doctor)
        .department("Cardiology")
        .build();
    let filter = AccessFilter::new(Some(&doctor), ward.records());

    let patients = filter.filter_patients_by_user();
    assert!(patients.iter().all(|p| p.doctor_id == "d1"));
    assert_eq!(ids(&patients, |p| &p.id), ["p1", "p3"]);

    // e3 is written by d2 but belongs to d1's patient.
    assert_eq!(ids(&filter.filter_emrs_by_user(&ward.emrs), |e| &e.id), ["e1", "e3"]);
    assert_eq!(
        ids(&filter.filter_lab_results_by_user(&ward.lab_results), |r| &r.id),
        ["r1"]
    );
    assert_eq!(
        ids(&filter.filter_activity_by_user(&ward.activity), |a| &a.id),
        ["act1", "act2"]
    );
}

#[test]
fn test_doctor_consultations_keep_order() {
    let ward = ward();
    let doctor = User::builder("d1", "house", Role::Doctor).build();
    let filter = AccessFilter::new(Some(&doctor), ward.records());

    let consultations = filter.filter_consultations_by_user(&ward.consultations);
    assert_eq!(ids(&consultations, |c| &c.id), ["c1", "c3"]);
}

#[test]
fn test_nurse_sees_department() {
    let ward = ward();
    let nurse = User::builder("n1", "joy", Role::Nurse)
        .department("Emergency")
        .build();
    let filter = AccessFilter::new(Some(&nurse), ward.records());

    assert_eq!(ids(&filter.filter_patients_by_user(), |p| &p.id), ["p2", "p4"]);
    assert_eq!(ids(&filter.filter_emrs_by_user(&ward.emrs), |e| &e.id), ["e2"]);
    assert_eq!(
        ids(&filter.filter_lab_orders_by_user(&ward.lab_orders), |o| &o.id),
        ["o2", "o3"]
    );
    assert_eq!(
        ids(&filter.filter_activity_by_user(&ward.activity), |a| &a.id),
        ["act3"]
    );
}

#[test]
fn test_auxiliary_nurse_has_no_clinical_records() {
    let ward = ward();
    let aux = User::builder("x1", "aux", Role::AuxiliaryNurse)
        .department("Emergency")
        .build();
    let filter = AccessFilter::new(Some(&aux), ward.records());

    assert_eq!(filter.filter_patients_by_user().len(), 2);
    assert!(filter.filter_emrs_by_user(&ward.emrs).is_empty());
    assert!(filter.filter_lab_orders_by_user(&ward.lab_orders).is_empty());
    assert!(filter.filter_consultations_by_user(&ward.consultations).is_empty());
    assert_eq!(filter.filter_appointments_by_user(&ward.appointments).len(), 2);
}

#[test]
fn test_no_user_sees_nothing() {
    let ward = ward();
    let filter = AccessFilter::new(None, ward.records());

    assert!(filter.filter_patients_by_user().is_empty());
    assert!(filter.filter_emrs_by_user(&ward.emrs).is_empty());
    assert!(filter.filter_lab_orders_by_user(&ward.lab_orders).is_empty());
    assert!(filter.filter_lab_results_by_user(&ward.lab_results).is_empty());
    assert!(filter.filter_consultations_by_user(&ward.consultations).is_empty());
    assert!(filter.filter_appointments_by_user(&ward.appointments).is_empty());
    assert!(filter.filter_activity_by_user(&ward.activity).is_empty());
    for permission in Permission::ALL {
        assert!(!has_permission(None, permission));
    }
}

#[test]
fn test_unrecognized_role_is_locked_out() {
    let ward = ward();
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "z1",
        "username": "janitor",
        "role": "janitor",
        "department": "Emergency",
        "permissions": ["patients:view"]
    }))
    .unwrap();
    assert_eq!(user.role, Role::Unrecognized);

    let filter = AccessFilter::new(Some(&user), ward.records());
    assert!(filter.filter_patients_by_user().is_empty());
    assert!(!user.has_permission(Permission::PatientsView));
}

#[test]
fn test_can_view_matches_filtered_lists() {
    let ward = ward();
    let users = [
        User::builder("a1", "root", Role::Administrator).build(),
        User::builder("d1", "house", Role::Doctor).build(),
        User::builder("n1", "joy", Role::Nurse).department("Emergency").build(),
        User::builder("l1", "lab", Role::LabTechnician).build(),
    ];

    for user in &users {
        let filter = AccessFilter::new(Some(user), ward.records());
        let visible_patients = ids(&filter.filter_patients_by_user(), |p| &p.id);
        for patient in &ward.patients {
            assert_eq!(
                filter.can_user_view_patient(&patient.id),
                visible_patients.contains(&patient.id),
                "{} / {}",
                user.role,
                patient.id
            );
        }

        let visible_emrs = ids(&filter.filter_emrs_by_user(&ward.emrs), |e| &e.id);
        for emr in &ward.emrs {
            assert_eq!(
                filter.can_user_view_emr(&emr.id, &ward.emrs),
                visible_emrs.contains(&emr.id)
            );
        }
    }
}

#[test]
fn test_filtered_lists_are_subsets() {
    let ward = ward();
    for role in Role::KNOWN {
        let user = User::builder("d1", "u", role).department("Cardiology").build();
        let filter = AccessFilter::new(Some(&user), ward.records());

        for order in filter.filter_lab_orders_by_user(&ward.lab_orders) {
            assert!(ward.lab_orders.iter().any(|o| std::ptr::eq(o, order)));
        }
        for appointment in filter.filter_appointments_by_user(&ward.appointments) {
            assert!(ward.appointments.iter().any(|a| std::ptr::eq(a, appointment)));
        }
    }
}

#[test]
fn test_doctor_stats_come_from_filtered_lists() {
    let ward = ward();
    let doctor = User::builder("d1", "house", Role::Doctor).build();
    let stats = get_dashboard_stats_for_user(Some(&doctor), ward.records());

    assert_eq!(
        stats,
        DashboardStats::Doctor {
            my_patients: 2,
            critical_patients: 1,
            pending_emrs: 1,
            open_lab_orders: 1,
            critical_results: 1,
            upcoming_consultations: 2,
            upcoming_appointments: 1,
        }
    );
}

#[test]
fn test_administrator_stats() {
    let ward = ward();
    let admin = User::builder("a1", "root", Role::Administrator).build();
    let stats = get_dashboard_stats_for_user(Some(&admin), ward.records());

    assert_eq!(
        stats,
        DashboardStats::Administrator {
            total_patients: 4,
            admitted_patients: 2,
            critical_patients: 1,
            pending_emrs: 2,
            open_lab_orders: 2,
            critical_results: 2,
            upcoming_appointments: 2,
        }
    );
}

#[test]
fn test_triage_stats_count_levels() {
    let ward = ward();
    let aux = User::builder("x1", "aux", Role::AuxiliaryNurse)
        .department("Emergency")
        .build();
    let stats = get_dashboard_stats_for_user(Some(&aux), ward.records());

    assert_eq!(
        stats,
        DashboardStats::Triage {
            department_patients: 2,
            awaiting_triage: 1,
            by_level: [0, 0, 1, 0, 0],
            critical_patients: 0,
        }
    );
}

#[test]
fn test_front_desk_and_lab_stats() {
    let ward = ward();
    let clerk = User::builder("r1", "desk", Role::Receptionist).build();
    assert_eq!(
        get_dashboard_stats_for_user(Some(&clerk), ward.records()),
        DashboardStats::FrontDesk {
            total_patients: 4,
            upcoming_appointments: 2,
            checked_in: 1,
            cancelled_appointments: 1,
        }
    );

    let tech = User::builder("l1", "lab", Role::LabTechnician).build();
    assert_eq!(
        get_dashboard_stats_for_user(Some(&tech), ward.records()),
        DashboardStats::Laboratory {
            open_orders: 2,
            urgent_orders: 2,
            completed_orders: 1,
            critical_results: 2,
        }
    );
}

#[test]
fn test_gender_distribution_is_hospital_wide() {
    let ward = ward();
    let doctor = User::builder("d1", "house", Role::Doctor).build();

    let distribution = gender_distribution(Some(&doctor), &ward.patients);
    assert_eq!(
        distribution,
        vec![
            (Gender::Female, 1),
            (Gender::Male, 2),
            (Gender::Other, 1),
            (Gender::Unknown, 0),
        ]
    );
}
