//! Resolved configuration after merging flags, environment and defaults.
//!
//! [`ExporterConfig`] is built once at startup and handed by reference to
//! every component that needs it. It has no setters.

use std::fmt;

use serde::{Serialize, Serializer};

use super::capability::{Capability, CapabilitySet};
use super::cli::Cli;
use super::defaults;
use super::env::{EnvSource, apply_env, var};

/// Placeholder printed instead of the broker password.
pub const REDACTED: &str = "********";

/// Rendering mode for exporter output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Tty,
    /// Machine-readable JSON.
    Json,
}

impl OutputFormat {
    /// Interprets an output-format setting.
    ///
    /// `JSON` matches case-insensitively; every other value means TTY.
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Tty
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tty => f.write_str("TTY"),
            Self::Json => f.write_str("JSON"),
        }
    }
}

/// Fully resolved exporter configuration.
///
/// Every field holds a value after resolution. Use
/// [`ExporterConfig::resolve`] to build it from CLI flags and the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExporterConfig {
    pub(crate) rabbit_url: String,
    pub(crate) rabbit_user: String,
    #[serde(serialize_with = "redact")]
    pub(crate) rabbit_password: String,
    pub(crate) publish_port: String,
    pub(crate) output_format: String,
    pub(crate) ca_file: String,
    pub(crate) insecure_skip_verify: bool,
    pub(crate) skip_queues: String,
    pub(crate) include_queues: String,
    pub(crate) capabilities: CapabilitySet,
}

#[allow(clippy::ptr_arg)] // signature required by serialize_with
fn redact<S: Serializer>(_password: &String, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(REDACTED)
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Display for ExporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ rabbit_url: {}, rabbit_user: {}, rabbit_password: {REDACTED}, \
             publish_port: {}, output_format: {}, ca_file: {}, insecure_skip_verify: {}, \
             skip_queues: {}, include_queues: {}, capabilities: {} }}",
            self.rabbit_url,
            self.rabbit_user,
            self.publish_port,
            self.output_format,
            self.ca_file,
            self.insecure_skip_verify,
            self.skip_queues,
            self.include_queues,
            self.capabilities,
        )
    }
}

/// Flag-supplied values that take part in the merge.
///
/// The flag surface is narrower than the environment surface: only the
/// broker URL, credentials and listen address can be overridden from the
/// command line. An empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    /// `--rabbit.url`
    pub rabbit_url: String,
    /// `--rabbit.user`
    pub rabbit_user: String,
    /// `--rabbit.password`
    pub rabbit_password: String,
    /// `--web.listen-address`
    pub publish_port: String,
}

impl From<&Cli> for FlagOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            rabbit_url: cli.rabbit_url.clone().unwrap_or_default(),
            rabbit_user: cli.rabbit_user.clone().unwrap_or_default(),
            rabbit_password: cli.rabbit_password.clone().unwrap_or_default(),
            publish_port: cli.listen_address.clone(),
        }
    }
}

/// Merges flag values over `defaults`, field by field.
///
/// A non-empty flag wins; an empty flag keeps the value from `defaults`.
/// Fields with no flag equivalent always come from `defaults`.
#[must_use]
pub fn merge(flags: FlagOverrides, defaults: ExporterConfig) -> ExporterConfig {
    ExporterConfig {
        rabbit_url: prefer(flags.rabbit_url, defaults.rabbit_url),
        rabbit_user: prefer(flags.rabbit_user, defaults.rabbit_user),
        rabbit_password: prefer(flags.rabbit_password, defaults.rabbit_password),
        publish_port: prefer(flags.publish_port, defaults.publish_port),
        ..defaults
    }
}

fn prefer(flag: String, fallback: String) -> String {
    if flag.is_empty() { fallback } else { flag }
}

impl ExporterConfig {
    /// Returns the built-in defaults.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rabbit_url: defaults::RABBIT_URL.to_string(),
            rabbit_user: defaults::RABBIT_USER.to_string(),
            rabbit_password: defaults::RABBIT_PASSWORD.to_string(),
            publish_port: defaults::PUBLISH_PORT.to_string(),
            output_format: defaults::OUTPUT_FORMAT.to_string(),
            ca_file: defaults::CA_FILE.to_string(),
            insecure_skip_verify: defaults::INSECURE_SKIP_VERIFY,
            skip_queues: defaults::SKIP_QUEUES.to_string(),
            include_queues: defaults::INCLUDE_QUEUES.to_string(),
            capabilities: CapabilitySet::new(),
        }
    }

    /// Returns the built-in defaults overlaid with the environment layer.
    #[must_use]
    pub fn from_env(env: &dyn EnvSource) -> Self {
        apply_env(Self::builtin(), env)
    }

    /// Resolves the configuration: flags, then environment, then built-ins.
    ///
    /// Resolution is total. Invalid environment values fall back to the
    /// built-in value without raising an error. The result is not logged
    /// here; the caller logs it once.
    #[must_use]
    pub fn resolve(cli: &Cli, env: &dyn EnvSource) -> Self {
        warn_unmerged_flags(cli);
        merge(FlagOverrides::from(cli), Self::from_env(env))
    }

    /// Broker management API base URL.
    #[must_use]
    pub fn rabbit_url(&self) -> &str {
        &self.rabbit_url
    }

    /// Broker username.
    #[must_use]
    pub fn rabbit_user(&self) -> &str {
        &self.rabbit_user
    }

    /// Broker password.
    #[must_use]
    pub fn rabbit_password(&self) -> &str {
        &self.rabbit_password
    }

    /// Listen setting: a bare port or a `host:port` address.
    #[must_use]
    pub fn publish_port(&self) -> &str {
        &self.publish_port
    }

    /// Output format setting, verbatim.
    #[must_use]
    pub fn output_format_setting(&self) -> &str {
        &self.output_format
    }

    /// Output format interpreted as [`OutputFormat`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_setting(&self.output_format)
    }

    /// CA certificate file path.
    #[must_use]
    pub fn ca_file(&self) -> &str {
        &self.ca_file
    }

    /// Whether TLS certificate verification is skipped.
    #[must_use]
    pub const fn insecure_skip_verify(&self) -> bool {
        self.insecure_skip_verify
    }

    /// Regex of queue names to skip.
    #[must_use]
    pub fn skip_queues(&self) -> &str {
        &self.skip_queues
    }

    /// Regex of queue names to include.
    #[must_use]
    pub fn include_queues(&self) -> &str {
        &self.include_queues
    }

    /// Enabled capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// Returns `true` if `capability` is enabled.
    #[must_use]
    pub fn is_capability_enabled(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// Address the metrics endpoint should bind to.
    ///
    /// A bare port (the `PUBLISH_PORT` form) binds on all interfaces; a
    /// `host:port` value is returned unchanged.
    #[must_use]
    pub fn bind_address(&self) -> String {
        if let Some(port) = self.publish_port.strip_prefix(':') {
            return format!("{}:{port}", defaults::BIND_HOST);
        }
        if self.publish_port.contains(':') {
            return self.publish_port.clone();
        }
        format!("{}:{}", defaults::BIND_HOST, self.publish_port)
    }
}

/// Returns `true` if `capability` is enabled in `config`.
#[must_use]
pub fn is_capability_enabled(config: &ExporterConfig, capability: Capability) -> bool {
    config.is_capability_enabled(capability)
}

fn warn_unmerged_flags(cli: &Cli) {
    if cli.collector_skip.as_deref().is_some_and(|s| !s.is_empty()) {
        tracing::warn!(
            "--collector.skip is not applied; set {} instead",
            var::SKIP_QUEUES
        );
    }
    if cli
        .collector_include
        .as_deref()
        .is_some_and(|s| !s.is_empty())
    {
        tracing::warn!(
            "--collector.include is not applied; set {} instead",
            var::INCLUDE_QUEUES
        );
    }
}
