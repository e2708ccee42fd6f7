//! Validate command

use std::path::Path;

use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::ui;

use super::helpers::{load_settings, print_json};

/// Parse the settings and skip-list, then print the effective policy
pub fn run(config: Option<&Path>, args: &ValidateArgs) -> Result<()> {
    let settings = load_settings(config)?;
    let evaluation_config = settings.build_evaluation_config()?;

    if args.json {
        print_json(&settings)
    } else {
        print!("{}", ui::render_policy(&settings, &evaluation_config));
        Ok(())
    }
}
