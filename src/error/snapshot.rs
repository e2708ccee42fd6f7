//! Installation snapshot errors

use super::HealthCheckError;

/// Creates a snapshot not found error
pub fn not_found(path: impl Into<String>) -> HealthCheckError {
    HealthCheckError::SnapshotNotFound { path: path.into() }
}

/// Creates a snapshot read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> HealthCheckError {
    HealthCheckError::SnapshotReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a snapshot parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> HealthCheckError {
    HealthCheckError::SnapshotParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
