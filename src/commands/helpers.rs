//! Command helper utilities

use std::path::Path;

use tracing::debug;

use crate::config::{HealthCheckSettings, PolicySource, YamlPolicyFile};
use crate::error::{Result, io_error};

/// Load settings from the given file, or fall back to the defaults
pub fn load_settings(config: Option<&Path>) -> Result<HealthCheckSettings> {
    match config {
        Some(path) => {
            debug!(path = %path.display(), "Loading settings");
            YamlPolicyFile::new(path).settings()
        }
        None => Ok(HealthCheckSettings::default()),
    }
}

/// Pretty-print a value as JSON to stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io_error(format!("Failed to serialize output: {e}")))?;
    println!("{json}");
    Ok(())
}
