//! Resource domain types
//!
//! Mirrors what the OSGi installer reports about the artifacts it manages:
//! every artifact is a resource, resources competing for the same entity id
//! form a group, and the snapshot is the ordered list of groups.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::version::Version;

/// Kind of artifact a resource installs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// OSGi bundle (`bundle`)
    Bundle,
    /// OSGi configuration (`config`)
    Configuration,
    /// Anything else the installer handles (`file`, `properties`, ...)
    Other,
}

impl ResourceType {
    /// Map an installer type string to a resource type
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "bundle" => ResourceType::Bundle,
            "config" => ResourceType::Configuration,
            _ => ResourceType::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Bundle => "bundle",
            ResourceType::Configuration => "config",
            ResourceType::Other => "other",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResourceType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ResourceType::from_type_name(&raw))
    }
}

/// Installer state of a single resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceState {
    /// Waiting to be installed
    Install,
    /// Waiting to be uninstalled
    Uninstall,
    Installed,
    Uninstalled,
    /// Not installed because another resource of the group won
    Ignored,
}

impl ResourceState {
    /// `INSTALL` and `IGNORED` mean the resource did not converge.
    pub fn is_unhealthy(self) -> bool {
        matches!(self, ResourceState::Install | ResourceState::Ignored)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceState::Install => "INSTALL",
            ResourceState::Uninstall => "UNINSTALL",
            ResourceState::Installed => "INSTALLED",
            ResourceState::Uninstalled => "UNINSTALLED",
            ResourceState::Ignored => "IGNORED",
        }
    }
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate artifact known to the installer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactResource {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// Origin location (e.g. `jcrinstall:/apps/myapp/install/foo.jar`)
    pub url: String,

    pub state: ResourceState,

    /// Identity independent of version (bundle symbolic name or configuration PID)
    pub entity_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
}

impl ArtifactResource {
    pub fn new(
        resource_type: ResourceType,
        url: impl Into<String>,
        state: ResourceState,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            resource_type,
            url: url.into(),
            state,
            entity_id: entity_id.into(),
            version: None,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }
}

impl fmt::Display for ArtifactResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} ({} {})", self.url, self.entity_id, version),
            None => write!(f, "{} ({})", self.url, self.entity_id),
        }
    }
}

/// All candidate resources for one entity id, in installer order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub resources: Vec<ArtifactResource>,
}

impl ResourceGroup {
    pub fn new(resources: Vec<ArtifactResource>) -> Self {
        Self { resources }
    }
}

/// Point-in-time view of every group the installer manages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationState {
    #[serde(default)]
    pub groups: Vec<ResourceGroup>,
}

impl InstallationState {
    pub fn new(groups: Vec<ResourceGroup>) -> Self {
        Self { groups }
    }
}
