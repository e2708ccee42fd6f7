//! Installer health evaluation
//!
//! - [`evaluator`]: the group evaluation rules
//! - [`log`]: severity-tagged diagnostic log
//! - [`result`]: verdict handed to the caller
//! - [`check`]: long-lived component owning the active configuration

pub mod check;
pub mod evaluator;
pub mod log;
pub mod result;

pub use check::{InstallerHealthCheck, NAME};
pub use evaluator::{CheckedKind, DOCUMENTATION_URL, Evaluation, evaluate, evaluate_group};
pub use log::{DiagnosticLog, LogEntry, Severity};
pub use result::{HealthCheckResult, Status};
