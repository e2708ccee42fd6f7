//! Version command

use crate::error::Result;
use crate::health::{DOCUMENTATION_URL, NAME};

/// Lines printed by `installer-hc version`
fn version_lines() -> Vec<String> {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    vec![
        format!("installer-hc {}", env!("CARGO_PKG_VERSION")),
        format!("{NAME} (minimum Rust {})", env!("CARGO_PKG_RUST_VERSION")),
        format!("Build info: {profile} profile"),
        format!("Docs: {DOCUMENTATION_URL}"),
    ]
}

pub fn run() -> Result<()> {
    for line in version_lines() {
        println!("{line}");
    }
    Ok(())
}
