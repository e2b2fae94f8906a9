//! Queue-name filtering driven by the resolved configuration.
//!
//! A queue is exported when its name matches the include pattern and does
//! not match the skip pattern. The default patterns (`^$` skip, `.*`
//! include) let every named queue through.

use regex::Regex;

use crate::config::{ConfigError, ExporterConfig, field};

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

/// Compiled skip/include patterns.
///
/// # Examples
///
/// ```
/// use rabbit_exporter::config::ExporterConfig;
/// use rabbit_exporter::filter::QueueFilter;
///
/// let filter = QueueFilter::from_config(&ExporterConfig::builtin()).unwrap();
/// assert!(filter.matches("orders"));
/// ```
#[derive(Debug, Clone)]
pub struct QueueFilter {
    skip: Regex,
    include: Regex,
}

impl QueueFilter {
    /// Compiles skip and include patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRegex`] naming the offending field if
    /// either pattern does not compile.
    pub fn new(skip: &str, include: &str) -> Result<Self, ConfigError> {
        let skip = Regex::new(skip)
            .map_err(|e| ConfigError::invalid_regex(field::SKIP_QUEUES, skip, e))?;
        let include = Regex::new(include)
            .map_err(|e| ConfigError::invalid_regex(field::INCLUDE_QUEUES, include, e))?;
        Ok(Self { skip, include })
    }

    /// Compiles the patterns carried by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRegex`] if either pattern does not compile.
    pub fn from_config(config: &ExporterConfig) -> Result<Self, ConfigError> {
        Self::new(config.skip_queues(), config.include_queues())
    }

    /// Returns `true` if the queue should be exported.
    #[must_use]
    pub fn matches(&self, queue_name: &str) -> bool {
        self.include.is_match(queue_name) && !self.skip.is_match(queue_name)
    }

    /// The skip pattern as written.
    #[must_use]
    pub fn skip_pattern(&self) -> &str {
        self.skip.as_str()
    }

    /// The include pattern as written.
    #[must_use]
    pub fn include_pattern(&self) -> &str {
        self.include.as_str()
    }
}
