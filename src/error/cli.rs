//! Command line errors

use super::HealthCheckError;

/// Creates an unknown shell error
pub fn unknown_shell(shell: impl Into<String>) -> HealthCheckError {
    HealthCheckError::UnknownShell {
        shell: shell.into(),
    }
}
