//! Skip-list errors

use super::HealthCheckError;

/// Creates an error for an entity id listed both with and without a version
pub fn contradictory_entry(entity_id: impl Into<String>) -> HealthCheckError {
    HealthCheckError::ContradictorySkipEntry {
        entity_id: entity_id.into(),
    }
}

/// Creates an invalid version error
pub fn invalid_version(input: impl Into<String>, reason: impl Into<String>) -> HealthCheckError {
    HealthCheckError::InvalidVersion {
        input: input.into(),
        reason: reason.into(),
    }
}
