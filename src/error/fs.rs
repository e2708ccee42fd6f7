//! File system errors

use super::HealthCheckError;

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> HealthCheckError {
    HealthCheckError::IoError {
        message: message.into(),
    }
}
