pub mod analytics;
pub mod path;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use zonetrack::EngineConfig;

use crate::cli::Cli;

/// Read and parse a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Write `value` to stdout as pretty JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Load `--config`, or the defaults when it is absent.
pub(crate) fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let config = match &cli.config {
        Some(path) => read_json::<EngineConfig>(path)?,
        None => EngineConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
