//! Health check verdict handed to the monitoring framework

use std::fmt;

use serde::{Deserialize, Serialize};

use super::log::{DiagnosticLog, LogEntry, Severity};

/// Overall status of a health check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warn,
    Critical,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warn => "WARN",
            Status::Critical => "CRITICAL",
        }
    }
}

impl From<Severity> for Status {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Status::Ok,
            Severity::Warn => Status::Warn,
            Severity::Critical => Status::Critical,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict plus the ordered diagnostic lines supporting it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub status: Status,
    pub entries: Vec<LogEntry>,
}

impl HealthCheckResult {
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Messages of all entries, in order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }
}

impl From<DiagnosticLog> for HealthCheckResult {
    fn from(log: DiagnosticLog) -> Self {
        Self {
            status: log.aggregate_severity().into(),
            entries: log.into_entries(),
        }
    }
}

impl fmt::Display for HealthCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status)?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
