//! Command implementations for the installer-hc CLI

pub mod check;
pub mod completions;
pub mod helpers;
pub mod validate;
pub mod version;
