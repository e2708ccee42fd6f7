//! Terminal presentation of health check results and policies
//!
//! Rendering returns plain `String`s so callers decide where output goes;
//! `console` drops the styling when stdout is not a terminal.

use std::fmt::Write as _;

use console::Style;

use crate::config::{EvaluationConfig, HealthCheckSettings, SkipRule};
use crate::health::{HealthCheckResult, LogEntry, NAME, Severity, Status};

fn status_style(status: Status) -> Style {
    match status {
        Status::Ok => Style::new().bold().green(),
        Status::Warn => Style::new().bold().yellow(),
        Status::Critical => Style::new().bold().red(),
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::new().dim(),
        Severity::Warn => Style::new().yellow(),
        Severity::Critical => Style::new().red(),
    }
}

fn render_entry(out: &mut String, entry: &LogEntry) {
    let label = format!("[{}]", entry.severity);
    let _ = writeln!(
        out,
        "  {:<10} {}",
        severity_style(entry.severity).apply_to(label),
        entry.message
    );
}

/// Render a result as a status header followed by one line per entry
pub fn render_result(result: &HealthCheckResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {}",
        Style::new().bold().apply_to(NAME),
        status_style(result.status).apply_to(result.status)
    );
    for entry in &result.entries {
        render_entry(&mut out, entry);
    }
    out
}

fn render_rule(rule: &SkipRule) -> String {
    match rule {
        SkipRule::AnyVersion => "any version".to_string(),
        SkipRule::Versions(versions) => versions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Render the effective policy derived from settings
pub fn render_policy(settings: &HealthCheckSettings, config: &EvaluationConfig) -> String {
    let bold = Style::new().bold();
    let mut out = String::new();

    let _ = writeln!(out, "{}", Style::new().bold().yellow().apply_to(NAME));
    let _ = writeln!(out, "  {} {}", bold.apply_to("Tags:"), settings.tags.join(", "));

    let _ = writeln!(out, "  {}", bold.apply_to("URL prefixes:"));
    if config.url_prefixes.is_empty() {
        let _ = writeln!(out, "    {}", Style::new().dim().apply_to("None"));
    }
    for prefix in &config.url_prefixes {
        let _ = writeln!(out, "    - {}", Style::new().cyan().apply_to(prefix));
    }

    let _ = writeln!(out, "  {} {}", bold.apply_to("Check bundles:"), config.check_bundles);
    let _ = writeln!(
        out,
        "  {} {}",
        bold.apply_to("Check configurations:"),
        config.check_configurations
    );
    let _ = writeln!(
        out,
        "  {} {}",
        bold.apply_to("Allow ignored artifacts in group:"),
        config.allow_ignored_artifacts_in_group
    );

    let _ = writeln!(out, "  {}", bold.apply_to("Skip list:"));
    if config.skip_list.is_empty() {
        let _ = writeln!(out, "    {}", Style::new().dim().apply_to("None"));
    }
    for (entity_id, rule) in config.skip_list.iter() {
        let _ = writeln!(
            out,
            "    - {} ({})",
            Style::new().cyan().apply_to(entity_id),
            render_rule(rule)
        );
    }
    out
}
