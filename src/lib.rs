//! RabbitMQ exporter configuration.
//!
//! A library for resolving the exporter's runtime settings from command-line
//! flags, environment variables and built-in defaults into one immutable
//! [`config::ExporterConfig`].

pub mod config;
pub mod filter;
