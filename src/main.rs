//! RabbitMQ exporter
//!
//! Entry point: resolves the configuration once and hands it to the
//! components that consume it.

use rabbit_exporter::config::{Cli, ExporterConfig, ProcessEnv};
use rabbit_exporter::filter::QueueFilter;
use std::process::ExitCode;

mod app;

use app::{exit_code, render, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let config = ExporterConfig::resolve(&cli, &ProcessEnv);
    tracing::info!("{config}");

    let filter = match QueueFilter::from_config(&config) {
        Ok(filter) => filter,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            eprintln!("Configuration error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };
    tracing::debug!(
        skip = filter.skip_pattern(),
        include = filter.include_pattern(),
        "Queue filter compiled"
    );

    if cli.is_show() {
        return handle_show(&config);
    }

    tracing::info!(
        bind = %config.bind_address(),
        format = %config.output_format(),
        "Configuration resolved"
    );
    exit_code::SUCCESS
}

/// Handles the `show` subcommand.
fn handle_show(config: &ExporterConfig) -> ExitCode {
    match render(config, config.output_format()) {
        Ok(text) => {
            println!("{}", text.trim_end());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}
