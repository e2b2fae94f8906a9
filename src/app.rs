//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and configuration
//! rendering that support the main entry point.

use rabbit_exporter::config::{ConfigError, ExporterConfig, OutputFormat, REDACTED};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - uncompilable queue pattern, render failure.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Sets up the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders the configuration in the requested format.
///
/// The password is always redacted.
///
/// # Errors
///
/// Returns [`ConfigError::Render`] if JSON serialization fails.
pub fn render(config: &ExporterConfig, format: OutputFormat) -> Result<String, ConfigError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Tty => Ok(render_tty(config)),
    }
}

fn render_tty(config: &ExporterConfig) -> String {
    let insecure = config.insecure_skip_verify().to_string();
    let capabilities = config.capabilities().to_string();
    let rows = [
        ("rabbit_url", config.rabbit_url()),
        ("rabbit_user", config.rabbit_user()),
        ("rabbit_password", REDACTED),
        ("publish_port", config.publish_port()),
        ("output_format", config.output_format_setting()),
        ("ca_file", config.ca_file()),
        ("insecure_skip_verify", insecure.as_str()),
        ("skip_queues", config.skip_queues()),
        ("include_queues", config.include_queues()),
        ("capabilities", capabilities.as_str()),
    ];

    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(key, value)| format!("{key:<width$}  {value}\n"))
        .collect()
}
