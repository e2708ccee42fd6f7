//! Check command
//!
//! Loads the policy, applies command line overrides, evaluates the snapshot
//! once and prints the verdict.

use std::path::Path;

use crate::cli::CheckArgs;
use crate::config::HealthCheckSettings;
use crate::error::Result;
use crate::health::{HealthCheckResult, InstallerHealthCheck, NAME};
use crate::snapshot::FileSnapshotProvider;
use crate::ui;

use super::helpers::{load_settings, print_json};

/// Run the check command. Returns whether the installation is healthy.
pub fn run(config: Option<&Path>, args: &CheckArgs) -> Result<bool> {
    let settings = apply_overrides(load_settings(config)?, args);
    let check = InstallerHealthCheck::activate(FileSnapshotProvider::new(&args.snapshot), &settings)?;
    let result = check.execute()?;

    if args.json {
        print_json(&json_report(&result))?;
    } else {
        print!("{}", ui::render_result(&result));
    }

    Ok(result.is_ok())
}

/// Command line values replace the corresponding settings
fn apply_overrides(mut settings: HealthCheckSettings, args: &CheckArgs) -> HealthCheckSettings {
    if !args.url_prefixes.is_empty() {
        settings.url_prefixes.clone_from(&args.url_prefixes);
    }
    if !args.skip.is_empty() {
        settings.skip_entity_ids.clone_from(&args.skip);
    }
    if args.allow_ignored_artifacts_in_group {
        settings.allow_ignored_artifacts_in_group = true;
    }
    if args.no_bundles {
        settings.check_bundles = false;
    }
    if args.no_configurations {
        settings.check_configurations = false;
    }
    settings
}

fn json_report(result: &HealthCheckResult) -> serde_json::Value {
    serde_json::json!({
        "name": NAME,
        "ok": result.is_ok(),
        "status": result.status,
        "entries": result.entries,
    })
}
