use anyhow::Result;

use medboard_auth::{DashboardStats, Permission, gender_distribution};

use super::gate;
use crate::app::App;
use crate::cli::OutputFormat;
use crate::output::{print_json, print_pairs};

pub fn stats(app: &App) -> Result<()> {
    if !gate(app, Permission::DashboardView) {
        return Ok(());
    }
    let stats = app.filter().dashboard_stats();

    match app.format {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Table => {
            if stats == DashboardStats::Unavailable {
                println!("No dashboard for this role.");
                return Ok(());
            }
            let pairs: Vec<(String, String)> = stats
                .entries()
                .into_iter()
                .map(|(label, count)| (label, count.to_string()))
                .collect();
            print_pairs(["Metric", "Count"], &pairs);
            Ok(())
        }
    }
}

pub fn demographics(app: &App) -> Result<()> {
    if !gate(app, Permission::DashboardView) {
        return Ok(());
    }
    let distribution = gender_distribution(app.user(), app.store.patients());

    match app.format {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = distribution
                .iter()
                .filter_map(|(gender, count)| match serde_json::to_value(gender) {
                    Ok(serde_json::Value::String(key)) => Some((key, (*count).into())),
                    _ => None,
                })
                .collect();
            print_json(&map)
        }
        OutputFormat::Table => {
            let pairs: Vec<(String, String)> = distribution
                .iter()
                .map(|(gender, count)| (format!("{gender:?}"), count.to_string()))
                .collect();
            print_pairs(["Gender", "Patients"], &pairs);
            println!("Hospital-wide, across all departments.");
            Ok(())
        }
    }
}
