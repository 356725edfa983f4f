use anyhow::{Context, Result};

use crate::config::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to render configuration")?;
    print!("{content}");
    Ok(())
}
