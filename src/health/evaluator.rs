//! Group evaluation
//!
//! Walks every resource group of a snapshot, decides whether the group is in
//! scope and healthy, and records critical findings for resources that never
//! reached their installed state. Evaluation is a pure function of the
//! snapshot and the [`EvaluationConfig`]; debug details go to `tracing` and
//! never into the returned log.

use tracing::debug;

use crate::config::EvaluationConfig;
use crate::domain::{ArtifactResource, ResourceGroup, ResourceType};

use super::log::{DiagnosticLog, Severity};
use super::result::HealthCheckResult;

/// Where operators find help on fixing reported resources
pub const DOCUMENTATION_URL: &str =
    "https://sling.apache.org/documentation/bundles/osgi-installer.html#health-check";

/// Resource types the health check evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckedKind {
    Bundle,
    Configuration,
}

impl CheckedKind {
    /// Checked kind for a resource type, `None` when the type is not checked
    /// under the given policy
    fn of(resource_type: ResourceType, config: &EvaluationConfig) -> Option<Self> {
        if !config.checks(resource_type) {
            return None;
        }
        match resource_type {
            ResourceType::Bundle => Some(CheckedKind::Bundle),
            ResourceType::Configuration => Some(CheckedKind::Configuration),
            ResourceType::Other => None,
        }
    }
}

/// Outcome of one evaluation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub log: DiagnosticLog,
    pub bundle_groups_checked: usize,
    pub configuration_groups_checked: usize,
}

impl Evaluation {
    pub fn into_result(self) -> HealthCheckResult {
        HealthCheckResult::from(self.log)
    }
}

/// Evaluate all groups of a snapshot against the policy
pub fn evaluate(groups: &[ResourceGroup], config: &EvaluationConfig) -> Evaluation {
    let mut log = DiagnosticLog::new();
    let mut bundle_groups_checked = 0;
    let mut configuration_groups_checked = 0;

    for group in groups {
        match evaluate_group(group, config, &mut log) {
            Some(CheckedKind::Bundle) => bundle_groups_checked += 1,
            Some(CheckedKind::Configuration) => configuration_groups_checked += 1,
            None => {}
        }
    }

    log.info(format!(
        "Checked {bundle_groups_checked} OSGi bundle and {configuration_groups_checked} configuration groups."
    ));
    if log.aggregate_severity() >= Severity::Warn {
        log.info(format!(
            "Refer to the OSGi installer's documentation page at {DOCUMENTATION_URL} for further details on how to fix those issues."
        ));
    }

    Evaluation {
        log,
        bundle_groups_checked,
        configuration_groups_checked,
    }
}

/// Evaluate a single group.
///
/// Returns the kind the group is counted as, or `None` when the group is not
/// relevant: it holds a type that is not checked, or none of its resources is
/// in scope.
pub fn evaluate_group(
    group: &ResourceGroup,
    config: &EvaluationConfig,
    log: &mut DiagnosticLog,
) -> Option<CheckedKind> {
    let mut relevant_kind = None;
    let mut first_unhealthy: Option<(&ArtifactResource, CheckedKind)> = None;

    for resource in &group.resources {
        let Some(kind) = CheckedKind::of(resource.resource_type, config) else {
            debug!(
                resource = %resource,
                resource_type = %resource.resource_type,
                "Skipping group, resource type is not checked"
            );
            return None;
        };

        if !config.is_in_scope(&resource.url) {
            debug!(resource = %resource, "Skipping resource, URL matches no configured prefix");
            continue;
        }
        relevant_kind = Some(kind);

        if resource.state.is_unhealthy() {
            if !config.allow_ignored_artifacts_in_group {
                report_invalid_resource(resource, kind, config, log);
            } else if first_unhealthy.is_none() {
                first_unhealthy = Some((resource, kind));
            }
        } else if config.allow_ignored_artifacts_in_group {
            debug!(resource = %resource, state = %resource.state, "Group has a healthy resource");
            return Some(kind);
        }
    }

    if let Some((resource, kind)) = first_unhealthy {
        report_invalid_resource(resource, kind, config, log);
    }

    relevant_kind
}

/// Record a critical finding for an unhealthy resource unless the skip-list
/// exempts it
pub fn report_invalid_resource(
    resource: &ArtifactResource,
    kind: CheckedKind,
    config: &EvaluationConfig,
    log: &mut DiagnosticLog,
) {
    if config
        .skip_list
        .skips(&resource.entity_id, resource.version.as_ref())
    {
        debug!(
            resource = %resource,
            state = %resource.state,
            "Not reporting resource, it is on the skip list"
        );
        return;
    }

    let message = match kind {
        CheckedKind::Configuration => format!(
            "The installer state of the OSGi configuration resource '{resource}' is {}, config might have been manually overwritten!",
            resource.state
        ),
        CheckedKind::Bundle => format!(
            "The installer state of the OSGi bundle resource '{resource}' is {}, probably because a later or the same version of that bundle is already installed!",
            resource.state
        ),
    };
    log.critical(message);
}
