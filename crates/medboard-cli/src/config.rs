use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use medboard_auth::{AuthConfig, SessionConfig};

pub const DEFAULT_CONFIG_FILE: &str = "medboard.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            session: self.session.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(format!("logging.level must be one of {valid_levels:?}"));
        }
        if let Some(path) = &self.data.fixtures
            && path.as_os_str().is_empty()
        {
            return Err("data.fixtures cannot be empty".into());
        }
        self.auth().validate().map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}
fn default_log_level() -> String {
    "warn".into()
}
impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON fixture document. The bundled demo data is used when unset.
    #[serde(default)]
    pub fixtures: Option<PathBuf>,
}

/// Where the config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    CliArgument,
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliArgument => write!(f, "--config / MEDBOARD_CONFIG"),
            Self::Default => write!(f, "default ({DEFAULT_CONFIG_FILE})"),
        }
    }
}

/// `--config` (or `MEDBOARD_CONFIG`, which clap folds into it) first, then
/// `./medboard.toml`.
pub fn resolve_config_path(cli_path: Option<&str>) -> (String, ConfigSource) {
    match cli_path {
        Some(path) if !path.is_empty() => (path.to_string(), ConfigSource::CliArgument),
        _ => (DEFAULT_CONFIG_FILE.to_string(), ConfigSource::Default),
    }
}

pub mod loader {
    use super::AppConfig;
    use config::{Config, Environment, File};
    use std::path::PathBuf;

    /// Loads the file at `path` (skipped when absent), then applies
    /// `MEDBOARD__SECTION__KEY` environment overrides, then validates.
    pub fn load_config(path: &str) -> Result<AppConfig, String> {
        let mut builder = Config::builder();
        let pathbuf = PathBuf::from(path);
        if pathbuf.exists() {
            builder = builder.add_source(File::from(pathbuf));
        }
        // Environment variable overrides, e.g., MEDBOARD__SESSION__BACKEND=memory
        builder = builder.add_source(
            Environment::with_prefix("MEDBOARD")
                .prefix_separator("__")
                .try_parsing(true)
                .separator("__"),
        );
        let cfg = builder
            .build()
            .map_err(|e| format!("config build error: {e}"))?;
        let merged: AppConfig = cfg
            .try_deserialize()
            .map_err(|e| format!("config deserialize error: {e}"))?;
        merged.validate()?;
        Ok(merged)
    }
}
