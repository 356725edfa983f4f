use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "medboard")]
#[command(about = "medboard: the hospital dashboard, filtered by who you are")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./medboard.toml when present)
    #[arg(short, long, global = true, env = "MEDBOARD_CONFIG")]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with a username or email
    Login(LoginArgs),
    /// Log out (clear the stored session)
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Patients you can see
    Patients,
    /// Electronic medical records you can see
    Emrs,
    /// Lab orders you can see
    LabOrders,
    /// Lab results you can see
    LabResults,
    /// Consultations you can see
    Consultations,
    /// Appointments you can see
    Appointments,
    /// Recent activity you can see
    Activity,
    /// Dashboard statistics for your role
    Stats,
    /// Hospital-wide patient gender distribution
    Demographics,
    /// Check whether you can open a specific record
    CanView(CanViewArgs),
    /// Check a permission tag (e.g. laboratory:view)
    Check(CheckArgs),
    /// List your effective permissions
    Permissions,
    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(clap::Args)]
pub struct LoginArgs {
    /// Username or email
    #[arg(short, long)]
    pub username: String,
    /// Password
    #[arg(long, env = "MEDBOARD_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(clap::Args)]
pub struct CanViewArgs {
    #[command(subcommand)]
    pub target: CanViewTarget,
}

#[derive(Subcommand)]
pub enum CanViewTarget {
    /// A patient by id
    Patient { id: String },
    /// An EMR by id
    Emr { id: String },
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Permission tag, area:action
    pub permission: String,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
}
