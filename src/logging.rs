//! Tracing initialization for the command line tool.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "INSTALLER_HC_LOG";

static INIT: Once = Once::new();

/// Default filter directive when `INSTALLER_HC_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "installer_hc=debug"
    } else {
        "installer_hc=info"
    }
}

/// Initialize logging to stderr.
///
/// Reads `INSTALLER_HC_LOG` (e.g. `INSTALLER_HC_LOG=installer_hc::health=debug`)
/// and falls back to [`default_directive`]. Only the first call has an effect.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
