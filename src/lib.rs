//! installer-hc - OSGi installer health check
//!
//! Evaluates a snapshot of the OSGi installer's resource groups and reports
//! bundles and configurations that never converged to their installed state.
//!
//! ```no_run
//! use installer_hc::config::HealthCheckSettings;
//! use installer_hc::health::InstallerHealthCheck;
//! use installer_hc::snapshot::FileSnapshotProvider;
//!
//! # fn main() -> installer_hc::error::Result<()> {
//! let check = InstallerHealthCheck::activate(
//!     FileSnapshotProvider::new("state.json"),
//!     &HealthCheckSettings::default(),
//! )?;
//! let result = check.execute()?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod health;
pub mod logging;
pub mod snapshot;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_fixtures;
