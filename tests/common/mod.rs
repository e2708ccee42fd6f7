//! Common test utilities for installer-hc integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Snapshot with one stuck bundle group and one healthy configuration group
#[allow(dead_code)]
pub const STUCK_BUNDLE_SNAPSHOT: &str = r"
groups:
  - resources:
      - type: bundle
        url: jcrinstall:/apps/myapp/install/org.example.foo-1.0.0.jar
        state: IGNORED
        entity_id: org.example.foo
        version: 1.0.0
  - resources:
      - type: config
        url: jcrinstall:/apps/myapp/config/org.example.Bar.cfg.json
        state: INSTALLED
        entity_id: config:org.example.Bar
";

/// Snapshot where every group converged
#[allow(dead_code)]
pub const HEALTHY_SNAPSHOT: &str = r#"{
  "groups": [
    { "resources": [
      { "type": "bundle", "url": "jcrinstall:/apps/myapp/install/org.example.foo-1.1.0.jar",
        "state": "INSTALLED", "entity_id": "org.example.foo", "version": "1.1.0" }
    ] },
    { "resources": [
      { "type": "config", "url": "jcrinstall:/apps/myapp/config/org.example.Bar.cfg.json",
        "state": "INSTALLED", "entity_id": "config:org.example.Bar" }
    ] }
  ]
}"#;

/// A temporary directory holding settings and snapshot files
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace and return its path
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Path of a file in workspace, whether it exists or not
    pub fn file(&self, path: &str) -> PathBuf {
        self.path.join(path)
    }
}

/// Build the installer-hc command with logging environment cleared
#[allow(dead_code)]
pub fn hc_cmd() -> assert_cmd::Command {
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    let mut cmd = assert_cmd::Command::cargo_bin("installer-hc").expect("Binary not built");
    cmd.env_remove("INSTALLER_HC_LOG")
        .env_remove("INSTALLER_HC_CONFIG");
    cmd
}
