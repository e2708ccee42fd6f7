use clap::Parser;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Check a JSON snapshot with the default policy:\n    installer-hc check --snapshot state.json\n\n\
                  Check everything installed from /apps and /libs:\n    installer-hc check --snapshot state.json \
                  --url-prefix jcrinstall:/apps/ --url-prefix jcrinstall:/libs/\n\n\
                  Ignore a known bundle conflict:\n    installer-hc check --snapshot state.json --skip 'org.example.foo 1.0.0'\n\n\
                  Machine readable output:\n    installer-hc check --snapshot state.json --json\n\n\
                  EXIT STATUS:\n  \
                  0  all checked groups are healthy\n  \
                  1  at least one finding of WARN or CRITICAL severity\n  \
                  2  invalid configuration or unreadable snapshot")]
pub struct CheckArgs {
    /// Installation snapshot to evaluate (.json, otherwise YAML)
    #[arg(long, short = 's')]
    pub snapshot: PathBuf,

    /// Only check resources whose URL starts with this prefix (repeatable, replaces configured prefixes)
    #[arg(long = "url-prefix", value_name = "PREFIX")]
    pub url_prefixes: Vec<String>,

    /// Skip-list entry `<entity id> [<version>]` (repeatable, replaces configured entries)
    #[arg(long, value_name = "ENTRY")]
    pub skip: Vec<String>,

    /// Accept ignored artifacts as long as one artifact of the group is installed
    #[arg(long)]
    pub allow_ignored_artifacts_in_group: bool,

    /// Do not check OSGi bundles
    #[arg(long)]
    pub no_bundles: bool,

    /// Do not check OSGi configurations
    #[arg(long)]
    pub no_configurations: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
