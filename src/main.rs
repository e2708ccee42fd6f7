//! installer-hc - OSGi installer health check
//!
//! Command line front end: evaluates an installer snapshot and exits with
//! 0 when healthy, 1 when findings were reported and 2 on errors.

use clap::Parser;

use installer_hc::cli::{Cli, Commands};
use installer_hc::commands;
use installer_hc::logging;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let result = match &cli.command {
        Commands::Check(args) => commands::check::run(config, args),
        Commands::Validate(args) => commands::validate::run(config, args).map(|()| true),
        Commands::Version => commands::version::run().map(|()| true),
        Commands::Completions(args) => commands::completions::run(args).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(help) = e.help_text() {
                eprintln!("Help: {}", help);
            }
            std::process::exit(2);
        }
    }
}
