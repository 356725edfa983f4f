//! One command per dashboard page. Each page is gated on a permission and
//! lists only what the access filter returns.

use anyhow::Result;

use medboard_auth::Permission;

use super::gate;
use crate::app::App;
use crate::output::print_records;

pub fn patients(app: &App) -> Result<()> {
    if !gate(app, Permission::PatientsView) {
        return Ok(());
    }
    print_records(&app.filter().filter_patients_by_user(), app.format, "patients")
}

pub fn emrs(app: &App) -> Result<()> {
    if !gate(app, Permission::EmrView) {
        return Ok(());
    }
    let emrs = app.filter().filter_emrs_by_user(app.store.emrs());
    print_records(&emrs, app.format, "medical records")
}

pub fn lab_orders(app: &App) -> Result<()> {
    if !gate(app, Permission::LaboratoryView) {
        return Ok(());
    }
    let orders = app.filter().filter_lab_orders_by_user(app.store.lab_orders());
    print_records(&orders, app.format, "lab orders")
}

pub fn lab_results(app: &App) -> Result<()> {
    if !gate(app, Permission::LaboratoryView) {
        return Ok(());
    }
    let results = app
        .filter()
        .filter_lab_results_by_user(app.store.lab_results());
    print_records(&results, app.format, "lab results")
}

pub fn consultations(app: &App) -> Result<()> {
    if !gate(app, Permission::ConsultationsView) {
        return Ok(());
    }
    let consultations = app
        .filter()
        .filter_consultations_by_user(app.store.consultations());
    print_records(&consultations, app.format, "consultations")
}

pub fn appointments(app: &App) -> Result<()> {
    if !gate(app, Permission::SchedulingView) {
        return Ok(());
    }
    let appointments = app
        .filter()
        .filter_appointments_by_user(app.store.appointments());
    print_records(&appointments, app.format, "appointments")
}

pub fn activity(app: &App) -> Result<()> {
    if !gate(app, Permission::DashboardView) {
        return Ok(());
    }
    let activity = app.filter().filter_activity_by_user(app.store.activity());
    print_records(&activity, app.format, "recent activity")
}
