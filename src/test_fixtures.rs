//! Test fixtures for building installer snapshots with a single call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{bundle, config, group};
//!
//! let snapshot = vec![
//!     group(vec![bundle("jcrinstall:/apps/a.jar", ResourceState::Ignored, "a", "1.0.0")]),
//!     group(vec![config("jcrinstall:/apps/b.config", ResourceState::Installed, "b")]),
//! ];
//! ```

use crate::config::{EvaluationConfig, SkipList};
use crate::domain::{ArtifactResource, ResourceGroup, ResourceState, ResourceType, Version};

/// URL prefix used by [`EvaluationConfig::default`]
pub const APPS: &str = "jcrinstall:/apps/";

/// Bundle resource with a version.
///
/// # Panics
///
/// Panics if `version` does not parse.
#[must_use]
pub fn bundle(url: &str, state: ResourceState, entity_id: &str, version: &str) -> ArtifactResource {
    ArtifactResource::new(ResourceType::Bundle, url, state, entity_id)
        .with_version(Version::parse(version).expect("Invalid fixture version"))
}

/// Configuration resource (configurations carry no version)
#[must_use]
pub fn config(url: &str, state: ResourceState, entity_id: &str) -> ArtifactResource {
    ArtifactResource::new(ResourceType::Configuration, url, state, entity_id)
}

/// Resource of a type the health check ignores
#[must_use]
pub fn file(url: &str, state: ResourceState, entity_id: &str) -> ArtifactResource {
    ArtifactResource::new(ResourceType::Other, url, state, entity_id)
}

#[must_use]
pub fn group(resources: Vec<ArtifactResource>) -> ResourceGroup {
    ResourceGroup::new(resources)
}

/// Default evaluation policy with the given skip-list entries.
///
/// # Panics
///
/// Panics if the entries do not form a valid skip-list.
#[must_use]
pub fn config_with_skips(entries: &[&str]) -> EvaluationConfig {
    EvaluationConfig {
        skip_list: SkipList::parse(entries).expect("Invalid fixture skip list"),
        ..EvaluationConfig::default()
    }
}

/// Default evaluation policy that tolerates ignored artifacts as long as one
/// resource of the group is installed
#[must_use]
pub fn tolerant_config() -> EvaluationConfig {
    EvaluationConfig {
        allow_ignored_artifacts_in_group: true,
        ..EvaluationConfig::default()
    }
}
