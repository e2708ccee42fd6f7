//! Long-lived installer health check component
//!
//! Holds the active [`EvaluationConfig`] behind a `parking_lot::RwLock`.
//! Reconfiguration builds the new policy outside the lock and only swaps the
//! pointer under it, so every run sees one fully formed configuration.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::config::{EvaluationConfig, HealthCheckSettings, PolicySource};
use crate::error::{Result, not_active};
use crate::snapshot::SnapshotProvider;

use super::evaluator::evaluate;
use super::result::HealthCheckResult;

/// Name the check registers under
pub const NAME: &str = "OSGi Installer Health Check";

/// Health check over the resource groups of the OSGi installer
pub struct InstallerHealthCheck<P> {
    provider: P,
    tags: RwLock<Vec<String>>,
    config: RwLock<Option<Arc<EvaluationConfig>>>,
}

impl<P: SnapshotProvider> InstallerHealthCheck<P> {
    /// Activate the check. An invalid configuration refuses activation.
    pub fn activate(provider: P, settings: &HealthCheckSettings) -> Result<Self> {
        let config = settings.build_evaluation_config()?;
        info!(
            url_prefixes = ?config.url_prefixes,
            skipped_ids = config.skip_list.len(),
            "Activated {NAME}"
        );
        Ok(Self {
            provider,
            tags: RwLock::new(settings.tags.clone()),
            config: RwLock::new(Some(Arc::new(config))),
        })
    }

    /// Activate with settings taken from a policy source
    pub fn from_policy(provider: P, source: &dyn PolicySource) -> Result<Self> {
        Self::activate(provider, &source.settings()?)
    }

    /// Apply updated settings.
    ///
    /// On failure the check is deactivated and stays so until a valid
    /// configuration is applied.
    pub fn modified(&self, settings: &HealthCheckSettings) -> Result<()> {
        match settings.build_evaluation_config() {
            Ok(config) => {
                let config = Arc::new(config);
                *self.config.write() = Some(config);
                *self.tags.write() = settings.tags.clone();
                debug!("Applied new configuration to {NAME}");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Rejected configuration, deactivating {NAME}");
                self.deactivate();
                Err(e)
            }
        }
    }

    /// Re-read settings from a policy source and apply them
    pub fn reload(&self, source: &dyn PolicySource) -> Result<()> {
        match source.settings() {
            Ok(settings) => self.modified(&settings),
            Err(e) => {
                warn!(error = %e, "Could not read settings, deactivating {NAME}");
                self.deactivate();
                Err(e)
            }
        }
    }

    pub fn deactivate(&self) {
        *self.config.write() = None;
    }

    pub fn is_active(&self) -> bool {
        self.config.read().is_some()
    }

    /// Configuration the next run evaluates against
    pub fn current_config(&self) -> Option<Arc<EvaluationConfig>> {
        self.config.read().clone()
    }

    /// Run the check against a fresh snapshot
    pub fn execute(&self) -> Result<HealthCheckResult> {
        let config = self.current_config().ok_or_else(|| not_active(NAME))?;
        let state = self.provider.installation_state()?;

        let evaluation = evaluate(&state.groups, &config);
        debug!(
            bundle_groups = evaluation.bundle_groups_checked,
            configuration_groups = evaluation.configuration_groups_checked,
            "Evaluated installation snapshot"
        );
        Ok(evaluation.into_result())
    }

    pub fn name(&self) -> &'static str {
        NAME
    }

    pub fn tags(&self) -> Vec<String> {
        self.tags.read().clone()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
