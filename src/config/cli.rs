//! CLI argument parsing using clap.
//!
//! The flag names keep the dotted Prometheus-exporter style
//! (`--rabbit.url`, `--web.listen-address`, ...).
//!
//! The single-dash spellings accepted by older deployments
//! (`-rabbit.url=...`, `-web.listen-address :9419`) are rewritten to the
//! double-dash form before clap sees them. Only the dotted flag names are
//! rewritten; `-v` and the other short flags are untouched.

use std::ffi::OsString;

use clap::{Parser, Subcommand};

use super::defaults;

/// RabbitMQ exporter
///
/// Resolves the exporter configuration from flags, environment variables
/// and built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "rabbit-exporter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// RabbitMQ management API base URL (overrides RABBIT_URL)
    #[arg(long = "rabbit.url", value_name = "URL")]
    pub rabbit_url: Option<String>,

    /// RabbitMQ username (overrides RABBIT_USER)
    #[arg(long = "rabbit.user", value_name = "USER")]
    pub rabbit_user: Option<String>,

    /// RabbitMQ password (overrides RABBIT_PASSWORD)
    #[arg(long = "rabbit.password", value_name = "PASSWORD")]
    pub rabbit_password: Option<String>,

    /// Address to listen on for metric scrapes; pass an empty value to fall back to PUBLISH_PORT
    #[arg(
        long = "web.listen-address",
        value_name = "ADDR",
        default_value = defaults::LISTEN_ADDRESS_FLAG
    )]
    pub listen_address: String,

    /// Regex of queue names to skip (not applied; use SKIP_QUEUES)
    #[arg(long = "collector.skip", value_name = "PATTERN")]
    pub collector_skip: Option<String>,

    /// Regex of queue names to include (not applied; use INCLUDE_QUEUES)
    #[arg(long = "collector.include", value_name = "PATTERN")]
    pub collector_include: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for rabbit-exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the resolved configuration in its output format and exit
    Show,
}

/// Dotted flag names that also accept a single leading dash.
pub const DOTTED_FLAGS: [&str; 6] = [
    "rabbit.url",
    "rabbit.user",
    "rabbit.password",
    "web.listen-address",
    "collector.skip",
    "collector.include",
];

/// Rewrites `-rabbit.url[=v]` style arguments to `--rabbit.url[=v]`.
///
/// Only the names in [`DOTTED_FLAGS`] are rewritten. Arguments after a
/// bare `--` are left alone.
#[must_use]
pub fn normalize_single_dash<I, T>(iter: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;
    iter.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            if arg.as_os_str() == "--" {
                after_terminator = true;
                return arg;
            }
            match arg.to_str().and_then(single_dash_flag) {
                Some(rewritten) => rewritten.into(),
                None => arg,
            }
        })
        .collect()
}

fn single_dash_flag(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    DOTTED_FLAGS.contains(&name).then(|| format!("-{arg}"))
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_single_dash(std::env::args_os()))
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(normalize_single_dash(iter))
    }

    /// Returns true if this is the show command.
    #[must_use]
    pub const fn is_show(&self) -> bool {
        matches!(self.command, Some(Command::Show))
    }
}
