//! Immutable evaluation policy
//!
//! Built once per configuration change by [`EvaluationConfig::from_settings`]
//! and never mutated afterwards; a reconfiguration builds a new value.

use crate::domain::ResourceType;
use crate::error::{Result, config_invalid};

use super::settings::HealthCheckSettings;
use super::skip_list::SkipList;

/// Policy applied by the group evaluator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationConfig {
    pub url_prefixes: Vec<String>,
    pub check_bundles: bool,
    pub check_configurations: bool,
    pub allow_ignored_artifacts_in_group: bool,
    pub skip_list: SkipList,
}

impl EvaluationConfig {
    /// Derive the policy from raw settings, parsing the skip-list
    pub fn from_settings(settings: &HealthCheckSettings) -> Result<Self> {
        let skip_list = SkipList::parse(&settings.skip_entity_ids)
            .map_err(|e| config_invalid("skip_entity_ids", e))?;

        Ok(Self {
            url_prefixes: settings.url_prefixes.clone(),
            check_bundles: settings.check_bundles,
            check_configurations: settings.check_configurations,
            allow_ignored_artifacts_in_group: settings.allow_ignored_artifacts_in_group,
            skip_list,
        })
    }

    /// Whether a resource URL starts with one of the configured prefixes
    pub fn is_in_scope(&self, url: &str) -> bool {
        self.url_prefixes
            .iter()
            .any(|prefix| url.starts_with(prefix.as_str()))
    }

    /// Whether checks are enabled for the given resource type.
    /// `Other` resources are never checked.
    pub fn checks(&self, resource_type: ResourceType) -> bool {
        match resource_type {
            ResourceType::Bundle => self.check_bundles,
            ResourceType::Configuration => self.check_configurations,
            ResourceType::Other => false,
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            url_prefixes: vec![super::settings::DEFAULT_URL_PREFIX.to_string()],
            check_bundles: true,
            check_configurations: true,
            allow_ignored_artifacts_in_group: false,
            skip_list: SkipList::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HealthCheckError;

    #[test]
    fn test_from_default_settings() {
        let config = EvaluationConfig::from_settings(&HealthCheckSettings::default()).unwrap();
        assert_eq!(config, EvaluationConfig::default());
    }

    #[test]
    fn test_from_settings_rejects_contradictory_skip_list() {
        let settings = HealthCheckSettings {
            skip_entity_ids: vec!["idA".to_string(), "idA 2.0.0".to_string()],
            ..HealthCheckSettings::default()
        };
        let err = EvaluationConfig::from_settings(&settings).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(matches!(err, HealthCheckError::ConfigInvalid { ref field, .. } if field == "skip_entity_ids"));
        assert!(err.to_string().contains("idA"));
    }

    #[test]
    fn test_is_in_scope() {
        let config = EvaluationConfig {
            url_prefixes: vec!["jcrinstall:/apps/".to_string(), "launchpad:".to_string()],
            ..EvaluationConfig::default()
        };
        assert!(config.is_in_scope("jcrinstall:/apps/install/foo.jar"));
        assert!(config.is_in_scope("launchpad:resources/install/0/bar.jar"));
        assert!(!config.is_in_scope("jcrinstall:/libs/install/foo.jar"));
    }

    #[test]
    fn test_no_prefixes_means_nothing_in_scope() {
        let config = EvaluationConfig {
            url_prefixes: Vec::new(),
            ..EvaluationConfig::default()
        };
        assert!(!config.is_in_scope("jcrinstall:/apps/install/foo.jar"));
    }

    #[test]
    fn test_checks_per_type() {
        let config = EvaluationConfig {
            check_bundles: false,
            ..EvaluationConfig::default()
        };
        assert!(!config.checks(ResourceType::Bundle));
        assert!(config.checks(ResourceType::Configuration));
        assert!(!config.checks(ResourceType::Other));
    }
}
