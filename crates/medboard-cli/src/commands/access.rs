use anyhow::Result;
use colored::Colorize;

use crate::app::App;
use crate::cli::{CanViewTarget, OutputFormat};
use crate::output::{print_error, print_json};

fn verdict(allowed: bool) -> String {
    if allowed {
        "allowed".green().to_string()
    } else {
        "denied".red().to_string()
    }
}

/// Outcome of a single-record visibility check. `label` is only filled in
/// when the record exists and the user may see it.
#[derive(Debug, PartialEq, Eq)]
struct ViewCheck<'a> {
    kind: &'static str,
    id: &'a str,
    allowed: bool,
    label: Option<String>,
}

fn view_check<'a>(app: &App, target: &'a CanViewTarget) -> ViewCheck<'a> {
    let filter = app.filter();
    match target {
        CanViewTarget::Patient { id } => {
            let allowed = filter.can_user_view_patient(id);
            ViewCheck {
                kind: "patient",
                id,
                allowed,
                label: allowed
                    .then(|| app.store.patient(id).map(|patient| patient.name.clone()))
                    .flatten(),
            }
        }
        CanViewTarget::Emr { id } => {
            let allowed = filter.can_user_view_emr(id, app.store.emrs());
            ViewCheck {
                kind: "emr",
                id,
                allowed,
                label: allowed
                    .then(|| app.store.emr(id).map(|emr| emr.summary.clone()))
                    .flatten(),
            }
        }
    }
}

pub fn can_view(app: &App, target: &CanViewTarget) -> Result<()> {
    let check = view_check(app, target);

    match app.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "kind": check.kind,
            "id": check.id,
            "allowed": check.allowed,
            "label": check.label,
        })),
        OutputFormat::Table => {
            match &check.label {
                Some(label) => println!(
                    "{}/{} ({label}): {}",
                    check.kind,
                    check.id,
                    verdict(check.allowed)
                ),
                None => println!("{}/{}: {}", check.kind, check.id, verdict(check.allowed)),
            }
            Ok(())
        }
    }
}

pub fn check(app: &App, tag: &str) -> Result<()> {
    let allowed = app.user().is_some_and(|user| user.has_permission_tag(tag));

    match app.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "permission": tag,
            "allowed": allowed,
        })),
        OutputFormat::Table => {
            println!("{tag}: {}", verdict(allowed));
            Ok(())
        }
    }
}

pub fn permissions(app: &App) -> Result<()> {
    let Some(user) = app.user() else {
        print_error("Not logged in");
        return Ok(());
    };
    let effective = user.effective_permissions();
    let tags: Vec<&str> = effective.to_vec().iter().map(|p| p.as_str()).collect();

    match app.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "role": user.role,
            "wildcard": effective.is_wildcard(),
            "permissions": tags,
        })),
        OutputFormat::Table => {
            if effective.is_wildcard() {
                println!("{} holds every permission", user.role.as_str().cyan());
            }
            if tags.is_empty() {
                println!("No permissions");
            }
            for tag in tags {
                println!("  {tag}");
            }
            Ok(())
        }
    }
}
