use clap::Parser;

/// Arguments for the validate command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the default policy:\n    installer-hc validate\n\n\
                  Validate a policy file:\n    installer-hc validate --config hc.yaml")]
pub struct ValidateArgs {
    /// Print the effective policy as JSON
    #[arg(long)]
    pub json: bool,
}
