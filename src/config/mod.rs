//! Configuration layer for the RabbitMQ exporter.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - The environment layer ([`EnvSource`], [`ProcessEnv`])
//! - Capability parsing ([`Capability`], [`CapabilitySet`])
//! - The resolved configuration ([`ExporterConfig`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Non-empty CLI flags** - `--rabbit.url`, `--rabbit.user`,
//!    `--rabbit.password`, `--web.listen-address`
//! 2. **Environment variables** - non-empty and accepted by the field validator
//! 3. **Built-in defaults**
//!
//! An empty flag or variable counts as unset.
//!
//! # Environment-Only Options
//!
//! Output format, CA file, TLS skip-verify, queue filters and capabilities
//! have no flag equivalent. `--collector.skip` and `--collector.include` are
//! accepted for compatibility but never merged; a warning is logged when they
//! are set.
//!
//! # Listen Address
//!
//! `--web.listen-address` defaults to `127.0.0.1:9090`, so `PUBLISH_PORT`
//! only takes effect when the flag is passed an empty value.
//!
//! # Silent Fallback
//!
//! A rejected environment value (URL that is not `http(s)://host`, port
//! that is not an integer) leaves the built-in default in place. Resolution
//! never fails.

mod capability;
mod cli;
pub mod defaults;
pub mod env;
mod error;
mod resolved;

#[cfg(test)]
mod cli_tests;

pub use capability::{Capability, CapabilitySet, UnknownCapability};
pub use cli::{Cli, Command};
pub use env::{EnvSource, ProcessEnv};
pub use error::{ConfigError, field};
pub use resolved::{
    ExporterConfig, FlagOverrides, OutputFormat, REDACTED, is_capability_enabled, merge,
};
