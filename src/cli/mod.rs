//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - check: Check command arguments
//! - validate: Validate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod validate;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use validate::ValidateArgs;

/// installer-hc - OSGi installer health check
///
/// Reports OSGi bundles and configurations that never reached their installed state.
#[derive(Parser, Debug)]
#[command(
    name = "installer-hc",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Health check for artifacts managed by the OSGi installer",
    long_about = "installer-hc evaluates a snapshot of the OSGi installer's resource groups and \
                  reports bundles and configurations that are stuck in INSTALL or were IGNORED, \
                  honouring URL prefixes and a skip list of known exceptions.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  installer-hc check --snapshot state.json              \x1b[90m# Check with default policy\x1b[0m\n   \
                  installer-hc check -c hc.yaml --snapshot state.yaml   \x1b[90m# Check with policy file\x1b[0m\n   \
                  installer-hc validate -c hc.yaml                      \x1b[90m# Show effective policy\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Policy settings file (YAML)
    #[arg(long, short = 'c', global = true, env = "INSTALLER_HC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate an installation snapshot
    Check(CheckArgs),

    /// Validate policy settings and print the effective policy
    Validate(ValidateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
