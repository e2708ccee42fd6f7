//! Configuration handling for installer-hc
//!
//! This module contains:
//! - [`settings`]: raw settings as read from YAML, and the policy sources providing them
//! - [`skip_list`]: the parsed skip-list of exempt entity ids
//! - [`evaluation`]: the immutable policy handed to the evaluator

pub mod evaluation;
pub mod settings;
pub mod skip_list;

pub use evaluation::EvaluationConfig;
pub use settings::{DEFAULT_URL_PREFIX, HealthCheckSettings, PolicySource, YamlPolicyFile};
pub use skip_list::{SkipList, SkipRule};
