//! Raw health check settings (policy source)
//!
//! Settings are the untyped-ish primitives an operator writes down. They are
//! turned into an [`EvaluationConfig`](super::EvaluationConfig) by
//! [`HealthCheckSettings::build_evaluation_config`], which is where the
//! skip-list gets validated.
//!
//! ```yaml
//! url_prefixes:
//!   - "jcrinstall:/apps/"
//! check_bundles: true
//! check_configurations: true
//! allow_ignored_artifacts_in_group: false
//! skip_entity_ids:
//!   - "config:org.example.Foo"
//!   - "bundle:org.example.bar 1.0.0"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_not_found, config_parse_failed, config_read_failed};

use super::evaluation::EvaluationConfig;

/// Default URL prefix: everything installed from `/apps` in the repository
pub const DEFAULT_URL_PREFIX: &str = "jcrinstall:/apps/";

fn default_tags() -> Vec<String> {
    vec!["installer".to_string(), "osgi".to_string()]
}

fn default_url_prefixes() -> Vec<String> {
    vec![DEFAULT_URL_PREFIX.to_string()]
}

fn default_true() -> bool {
    true
}

/// Health check settings as read from a settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckSettings {
    /// Tags with which this health check is associated
    #[serde(default = "default_tags", alias = "hc.tags", alias = "hc_tags")]
    pub tags: Vec<String>,

    /// Only resources whose URL starts with one of these prefixes are checked
    #[serde(default = "default_url_prefixes", alias = "urlPrefixes")]
    pub url_prefixes: Vec<String>,

    #[serde(default = "default_true", alias = "checkBundles")]
    pub check_bundles: bool,

    #[serde(default = "default_true", alias = "checkConfigurations")]
    pub check_configurations: bool,

    /// Accept ignored artifacts as long as one artifact of the same group is installed
    #[serde(default, alias = "allowIgnoredArtifactsInGroup")]
    pub allow_ignored_artifacts_in_group: bool,

    /// Entries of the form `<entity id> [<version>]`
    #[serde(default, alias = "skipEntityIds")]
    pub skip_entity_ids: Vec<String>,
}

impl Default for HealthCheckSettings {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            url_prefixes: default_url_prefixes(),
            check_bundles: true,
            check_configurations: true,
            allow_ignored_artifacts_in_group: false,
            skip_entity_ids: Vec::new(),
        }
    }
}

impl HealthCheckSettings {
    /// Parse settings from a YAML string. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(Self::parse_yaml(yaml)?)
    }

    fn parse_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load settings from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(config_not_found(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        Self::parse_yaml(&content)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Build the immutable evaluation policy, failing on an invalid skip-list
    pub fn build_evaluation_config(&self) -> Result<EvaluationConfig> {
        EvaluationConfig::from_settings(self)
    }
}

/// Supplier of raw settings, consulted on activation and on every update
pub trait PolicySource {
    fn settings(&self) -> Result<HealthCheckSettings>;
}

impl PolicySource for HealthCheckSettings {
    fn settings(&self) -> Result<HealthCheckSettings> {
        Ok(self.clone())
    }
}

/// Settings stored in a YAML file, re-read on every call
#[derive(Debug, Clone)]
pub struct YamlPolicyFile {
    path: PathBuf,
}

impl YamlPolicyFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PolicySource for YamlPolicyFile {
    fn settings(&self) -> Result<HealthCheckSettings> {
        HealthCheckSettings::load(&self.path)
    }
}
