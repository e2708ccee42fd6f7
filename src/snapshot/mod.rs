//! Installation snapshot providers
//!
//! The health check never computes installer state itself. It asks a
//! [`SnapshotProvider`] for one point-in-time [`InstallationState`] per run.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::InstallationState;
use crate::error::{Result, snapshot_not_found, snapshot_parse_failed, snapshot_read_failed};

/// Source of installer snapshots
pub trait SnapshotProvider: Send + Sync {
    /// Capture the current state of every resource group
    fn installation_state(&self) -> Result<InstallationState>;
}

impl SnapshotProvider for InstallationState {
    fn installation_state(&self) -> Result<InstallationState> {
        Ok(self.clone())
    }
}

/// Snapshot dumped to a JSON (`.json`) or YAML (anything else) file.
///
/// The file is re-read on every call, so a long-lived check picks up new dumps.
#[derive(Debug, Clone)]
pub struct FileSnapshotProvider {
    path: PathBuf,
}

impl FileSnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl SnapshotProvider for FileSnapshotProvider {
    fn installation_state(&self) -> Result<InstallationState> {
        let path = self.path.display().to_string();
        if !self.path.is_file() {
            return Err(snapshot_not_found(path));
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| snapshot_read_failed(&path, e.to_string()))?;

        let state: InstallationState = if self.is_json() {
            serde_json::from_str(&content).map_err(|e| snapshot_parse_failed(&path, e.to_string()))?
        } else if content.trim().is_empty() {
            InstallationState::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| snapshot_parse_failed(&path, e.to_string()))?
        };

        debug!(path = %path, groups = state.groups.len(), "Loaded installation snapshot");
        Ok(state)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::{ResourceState, ResourceType, Version};
    use crate::error::HealthCheckError;
    use tempfile::TempDir;

    const YAML_SNAPSHOT: &str = r"
groups:
  - resources:
      - type: bundle
        url: jcrinstall:/apps/install/foo-1.0.0.jar
        state: IGNORED
        entity_id: foo
        version: 1.0.0
      - type: bundle
        url: jcrinstall:/apps/install/foo-1.1.0.jar
        state: INSTALLED
        entity_id: foo
        version: 1.1.0
  - resources:
      - type: config
        url: jcrinstall:/apps/config/bar.cfg.json
        state: INSTALLED
        entity_id: config:bar
";

    #[test]
    fn test_in_memory_provider() {
        let state = InstallationState::default();
        assert_eq!(state.installation_state().unwrap(), state);
    }

    #[test]
    fn test_load_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("snapshot.yaml");
        std::fs::write(&path, YAML_SNAPSHOT).unwrap();

        let state = FileSnapshotProvider::new(&path).installation_state().unwrap();
        assert_eq!(state.groups.len(), 2);
        let first = &state.groups[0].resources[0];
        assert_eq!(first.resource_type, ResourceType::Bundle);
        assert_eq!(first.state, ResourceState::Ignored);
        assert_eq!(first.version, Some(Version::new(1, 0, 0)));
        assert_eq!(state.groups[1].resources[0].version, None);
    }

    #[test]
    fn test_load_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("snapshot.json");
        std::fs::write(
            &path,
            r#"{"groups":[{"resources":[{"type":"config","url":"jcrinstall:/apps/a.cfg.json","state":"INSTALL","entity_id":"config:a"}]}]}"#,
        )
        .unwrap();

        let state = FileSnapshotProvider::new(&path).installation_state().unwrap();
        assert_eq!(state.groups[0].resources[0].state, ResourceState::Install);
    }

    #[test]
    fn test_empty_yaml_is_empty_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("snapshot.yaml");
        std::fs::write(&path, "").unwrap();

        let state = FileSnapshotProvider::new(&path).installation_state().unwrap();
        assert!(state.groups.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = FileSnapshotProvider::new(temp.path().join("missing.json"))
            .installation_state()
            .unwrap_err();
        assert!(matches!(err, HealthCheckError::SnapshotNotFound { .. }));
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn test_malformed_json_names_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileSnapshotProvider::new(&path)
            .installation_state()
            .unwrap_err();
        assert!(matches!(err, HealthCheckError::SnapshotParseFailed { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_unknown_state_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("snapshot.yml");
        std::fs::write(
            &path,
            "groups:\n  - resources:\n      - {type: bundle, url: x, state: BROKEN, entity_id: a}\n",
        )
        .unwrap();

        assert!(FileSnapshotProvider::new(&path).installation_state().is_err());
    }
}
