mod app;
mod cli;
mod commands;
mod config;
mod observability;
mod output;

use anyhow::Result;
use clap::Parser;

use app::App;
use cli::{Cli, Commands, ConfigCommands};
use output::print_error;

fn main() {
    // .env is optional; only report it when present but unreadable.
    if let Err(e) = dotenvy::dotenv()
        && !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
    {
        eprintln!("Warning: Failed to load .env file: {e}");
    }

    observability::init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config_path, source) = config::resolve_config_path(cli.config.as_deref());
    let cfg = config::loader::load_config(&config_path)
        .map_err(|e| anyhow::anyhow!("Configuration error: {e}"))?;

    observability::apply_logging_level(&cfg.logging.level);
    tracing::debug!(path = %config_path, source = %source, "configuration loaded");

    if let Commands::Config(args) = &cli.command {
        return match args.command {
            ConfigCommands::Show => commands::config::show(&cfg),
        };
    }

    let mut app = App::open(&cfg, cli.format.unwrap_or_default())?;

    match &cli.command {
        Commands::Login(args) => commands::auth::login(&mut app, args)?,
        Commands::Logout => commands::auth::logout(&mut app)?,
        Commands::Whoami => commands::auth::whoami(&app)?,
        Commands::Patients => commands::pages::patients(&app)?,
        Commands::Emrs => commands::pages::emrs(&app)?,
        Commands::LabOrders => commands::pages::lab_orders(&app)?,
        Commands::LabResults => commands::pages::lab_results(&app)?,
        Commands::Consultations => commands::pages::consultations(&app)?,
        Commands::Appointments => commands::pages::appointments(&app)?,
        Commands::Activity => commands::pages::activity(&app)?,
        Commands::Stats => commands::stats::stats(&app)?,
        Commands::Demographics => commands::stats::demographics(&app)?,
        Commands::CanView(args) => commands::access::can_view(&app, &args.target)?,
        Commands::Check(args) => commands::access::check(&app, &args.permission)?,
        Commands::Permissions => commands::access::permissions(&app)?,
        Commands::Config(_) => {}
    }

    Ok(())
}
