//! Health check component errors

use super::HealthCheckError;

/// Creates a not active error for the named health check
pub fn not_active(name: impl Into<String>) -> HealthCheckError {
    HealthCheckError::NotActive { name: name.into() }
}
