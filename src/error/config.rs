//! Configuration errors

use super::HealthCheckError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> HealthCheckError {
    HealthCheckError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> HealthCheckError {
    HealthCheckError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> HealthCheckError {
    HealthCheckError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Wraps an error raised while deriving `field` from the raw settings
pub fn invalid(field: impl Into<String>, source: HealthCheckError) -> HealthCheckError {
    HealthCheckError::ConfigInvalid {
        field: field.into(),
        source: Box::new(source),
    }
}
