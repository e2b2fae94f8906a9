//! Environment variable layer.
//!
//! Each recognized variable overwrites the matching built-in default when it
//! is present, non-empty and passes its field validator. Rejected values are
//! logged at debug level and otherwise ignored.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::capability::CapabilitySet;
use super::resolved::ExporterConfig;

/// Recognized environment variable names.
pub mod var {
    /// Broker management API URL.
    pub const RABBIT_URL: &str = "RABBIT_URL";
    /// Broker username.
    pub const RABBIT_USER: &str = "RABBIT_USER";
    /// Broker password.
    pub const RABBIT_PASSWORD: &str = "RABBIT_PASSWORD";
    /// Metrics listen port.
    pub const PUBLISH_PORT: &str = "PUBLISH_PORT";
    /// Output format (`TTY` or `JSON`).
    pub const OUTPUT_FORMAT: &str = "OUTPUT_FORMAT";
    /// CA certificate file.
    pub const CAFILE: &str = "CAFILE";
    /// Skip TLS verification (`true` or `1`).
    pub const SKIPVERIFY: &str = "SKIPVERIFY";
    /// Queue-name skip pattern.
    pub const SKIP_QUEUES: &str = "SKIP_QUEUES";
    /// Queue-name include pattern.
    pub const INCLUDE_QUEUES: &str = "INCLUDE_QUEUES";
    /// Comma-separated capability names.
    pub const RABBIT_CAPABILITIES: &str = "RABBIT_CAPABILITIES";
}

// Matched against the lowercased value, so the host class stays ASCII.
static BROKER_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[a-z.0-9]+").expect("broker URL pattern is valid"));

/// Source of environment values.
///
/// Abstracted so resolution can be tested without touching the process
/// environment.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` if it is unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the value of `key` only if it is set and non-empty.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| (*value).to_string())
    }
}

/// Returns `true` if `url` contains an `http(s)://host` match, ignoring case.
///
/// The match is unanchored: `" http://broker"` and `"tcp+http://broker"`
/// are accepted.
#[must_use]
pub fn is_valid_broker_url(url: &str) -> bool {
    BROKER_URL.is_match(&url.to_lowercase())
}

/// Returns `true` if `port` parses as an integer.
#[must_use]
pub fn is_valid_port(port: &str) -> bool {
    port.parse::<i64>().is_ok()
}

/// Returns `true` only for the literal values `"true"` and `"1"`.
#[must_use]
pub fn parse_skip_verify(value: Option<&str>) -> bool {
    matches!(value, Some("true" | "1"))
}

/// Applies the environment layer on top of `config`.
pub(crate) fn apply_env(mut config: ExporterConfig, env: &dyn EnvSource) -> ExporterConfig {
    if let Some(url) = env.non_empty(var::RABBIT_URL) {
        if is_valid_broker_url(&url) {
            config.rabbit_url = url;
        } else {
            tracing::debug!("Ignoring {}: '{url}' is not an http(s) URL", var::RABBIT_URL);
        }
    }

    if let Some(user) = env.non_empty(var::RABBIT_USER) {
        config.rabbit_user = user;
    }

    if let Some(password) = env.non_empty(var::RABBIT_PASSWORD) {
        config.rabbit_password = password;
    }

    if let Some(port) = env.non_empty(var::PUBLISH_PORT) {
        if is_valid_port(&port) {
            config.publish_port = port;
        } else {
            tracing::debug!("Ignoring {}: '{port}' is not an integer", var::PUBLISH_PORT);
        }
    }

    if let Some(format) = env.non_empty(var::OUTPUT_FORMAT) {
        config.output_format = format;
    }

    if let Some(ca_file) = env.non_empty(var::CAFILE) {
        config.ca_file = ca_file;
    }

    if parse_skip_verify(env.var(var::SKIPVERIFY).as_deref()) {
        config.insecure_skip_verify = true;
    }

    if let Some(pattern) = env.non_empty(var::SKIP_QUEUES) {
        config.skip_queues = pattern;
    }

    if let Some(pattern) = env.non_empty(var::INCLUDE_QUEUES) {
        config.include_queues = pattern;
    }

    if let Some(raw) = env.non_empty(var::RABBIT_CAPABILITIES) {
        config.capabilities = CapabilitySet::parse(&raw);
    }

    config
}
