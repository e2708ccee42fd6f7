//! Diagnostic log filled during one evaluation run

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a single log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warn,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity, self.message)
    }
}

/// Append-only list of severity-tagged messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticLog {
    entries: Vec<LogEntry>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, severity: Severity, message: impl Into<String>) {
        self.entries.push(LogEntry {
            severity,
            message: message.into(),
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.add(Severity::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.add(Severity::Warn, message);
    }

    pub fn critical(&mut self, message: impl Into<String>) {
        self.add(Severity::Critical, message);
    }

    /// Highest severity recorded, `Info` for an empty log
    pub fn aggregate_severity(&self) -> Severity {
        self.entries
            .iter()
            .map(|e| e.severity)
            .max()
            .unwrap_or(Severity::Info)
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log_is_info() {
        assert_eq!(DiagnosticLog::new().aggregate_severity(), Severity::Info);
    }

    #[test]
    fn test_aggregate_is_maximum() {
        let mut log = DiagnosticLog::new();
        log.info("a");
        log.critical("b");
        log.warn("c");
        log.info("d");
        assert_eq!(log.aggregate_severity(), Severity::Critical);
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn test_entries_keep_order() {
        let mut log = DiagnosticLog::new();
        log.warn("first");
        log.info("second");
        let messages: Vec<&str> = log.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn test_entry_display() {
        let entry = LogEntry {
            severity: Severity::Critical,
            message: "broken".to_string(),
        };
        assert_eq!(entry.to_string(), "CRITICAL broken");
    }
}
