//! Domain models for installer-hc
//!
//! This module contains pure domain objects describing what the OSGi installer
//! reports: resources, their states and versions, and the groups they form.

pub mod resource;
pub mod version;

pub use resource::{ArtifactResource, InstallationState, ResourceGroup, ResourceState, ResourceType};
pub use version::Version;
