//! Error types and handling for installer-hc
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`check`]: Health check component errors
//! - [`cli`]: Command line errors
//! - [`config`]: Configuration file and policy errors
//! - [`skip_list`]: Skip-list and version parsing errors
//! - [`snapshot`]: Installation snapshot errors
//! - [`fs`]: File system errors
//!
//! Health findings (an artifact stuck in `INSTALL`, say) are never errors;
//! they end up as entries in the health check result.

pub mod check;
pub mod cli;
pub mod config;
pub mod fs;
pub mod skip_list;
pub mod snapshot;

pub use check::not_active;
pub use cli::unknown_shell;
pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::io_error;
pub use skip_list::{contradictory_entry, invalid_version};
pub use snapshot::{
    not_found as snapshot_not_found, parse_failed as snapshot_parse_failed,
    read_failed as snapshot_read_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer-hc operations
#[derive(Error, Diagnostic, Debug)]
pub enum HealthCheckError {
    // Skip-list errors
    #[error(
        "One entry with id '{entity_id}' contained no version limitation and there was another entry with the same id"
    )]
    #[diagnostic(
        code(installer_hc::skip_list::contradictory_entry),
        help("Only list the same id more than once if every entry for it carries a version")
    )]
    ContradictorySkipEntry { entity_id: String },

    #[error("Invalid version '{input}': {reason}")]
    #[diagnostic(
        code(installer_hc::skip_list::invalid_version),
        help("Versions have the form major[.minor[.micro[.qualifier]]], e.g. 1.2.0")
    )]
    InvalidVersion { input: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration in '{field}': {source}")]
    #[diagnostic(code(installer_hc::config::invalid))]
    ConfigInvalid {
        field: String,
        #[source]
        source: Box<HealthCheckError>,
    },

    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(installer_hc::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(installer_hc::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(installer_hc::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Snapshot errors
    #[error("Installation snapshot not found: {path}")]
    #[diagnostic(
        code(installer_hc::snapshot::not_found),
        help("Dump the installer state to a JSON or YAML file and pass it with --snapshot")
    )]
    SnapshotNotFound { path: String },

    #[error("Failed to read installation snapshot: {path}")]
    #[diagnostic(code(installer_hc::snapshot::read_failed))]
    SnapshotReadFailed { path: String, reason: String },

    #[error("Failed to parse installation snapshot {path}: {reason}")]
    #[diagnostic(code(installer_hc::snapshot::parse_failed))]
    SnapshotParseFailed { path: String, reason: String },

    // Component errors
    #[error("Health check '{name}' is not active")]
    #[diagnostic(
        code(installer_hc::check::not_active),
        help("The last configuration update was rejected; fix the configuration and apply it again")
    )]
    NotActive { name: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(installer_hc::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(installer_hc::fs::io_error))]
    IoError { message: String },
}

impl HealthCheckError {
    /// Help text for operators, taken from the wrapped error for
    /// [`HealthCheckError::ConfigInvalid`]
    pub fn help_text(&self) -> Option<String> {
        match self {
            HealthCheckError::ConfigInvalid { source, .. } => source.help_text(),
            other => other.help().map(|help| help.to_string()),
        }
    }

    /// Whether this error stems from invalid configuration rather than from
    /// the environment (missing snapshot, I/O failure, ...).
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            HealthCheckError::ContradictorySkipEntry { .. }
                | HealthCheckError::InvalidVersion { .. }
                | HealthCheckError::ConfigInvalid { .. }
                | HealthCheckError::ConfigNotFound { .. }
                | HealthCheckError::ConfigReadFailed { .. }
                | HealthCheckError::ConfigParseFailed { .. }
        )
    }
}

impl From<std::io::Error> for HealthCheckError {
    fn from(err: std::io::Error) -> Self {
        HealthCheckError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for HealthCheckError {
    fn from(err: serde_yaml::Error) -> Self {
        HealthCheckError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, HealthCheckError>;
