use anyhow::{Context, Result};
use colored::Colorize;

use medboard_auth::AuthError;

use crate::app::App;
use crate::cli::{LoginArgs, OutputFormat};
use crate::output::{print_error, print_json, print_pairs, print_success};

pub fn login(app: &mut App, args: &LoginArgs) -> Result<()> {
    let directory = app
        .store
        .user_directory()
        .context("Failed to build the account directory")?;

    match app.session.login(&directory, &args.username, &args.password) {
        Ok(session) => {
            let user = &session.user;
            print_success(&format!(
                "Logged in as {} ({})",
                user.display_name().cyan(),
                user.role.as_str().cyan()
            ));
            Ok(())
        }
        Err(AuthError::InvalidCredentials) => {
            anyhow::bail!("Invalid username or password")
        }
        Err(e) => Err(e).context("Login failed"),
    }
}

pub fn logout(app: &mut App) -> Result<()> {
    let was_logged_in = app.session.is_authenticated();
    app.session.logout().context("Failed to clear the stored session")?;
    if was_logged_in {
        print_success("Logged out (session cleared)");
    } else {
        println!("No active session");
    }
    Ok(())
}

pub fn whoami(app: &App) -> Result<()> {
    let Some(session) = app.session.session() else {
        print_error("Not logged in");
        return Ok(());
    };
    let user = &session.user;

    if matches!(app.format, OutputFormat::Json) {
        return print_json(user);
    }

    let token = session.token.as_str();
    let preview = format!("{}...{}", &token[..9], &token[token.len() - 4..]);
    print_pairs(
        ["Field", "Value"],
        &[
            ("ID".to_string(), user.id.clone()),
            ("Username".to_string(), user.username.clone()),
            ("Name".to_string(), user.display_name().to_string()),
            (
                "Email".to_string(),
                user.email.clone().unwrap_or_else(|| "-".to_string()),
            ),
            ("Role".to_string(), user.role.to_string()),
            (
                "Department".to_string(),
                user.department
                    .as_ref()
                    .map_or_else(|| "-".to_string(), ToString::to_string),
            ),
            ("Session".to_string(), preview),
        ],
    );
    Ok(())
}
