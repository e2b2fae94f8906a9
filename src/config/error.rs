//! Error types for configuration consumption.
//!
//! Resolution itself never fails; invalid individual values fall back to the
//! previous layer. These errors cover the checks performed on the resolved
//! configuration and its rendering.

use thiserror::Error;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A queue filter pattern does not compile.
    #[error("Invalid regex pattern for {field} '{pattern}': {source}")]
    InvalidRegex {
        /// Name of the field the pattern came from
        field: &'static str,
        /// The invalid pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Failed to render the configuration as JSON.
    #[error("Failed to render configuration: {0}")]
    Render(#[from] serde_json::Error),
}

/// Well-known field names for `InvalidRegex` errors.
///
/// Each name is the environment variable the pattern is read from.
pub mod field {
    /// The skip-queues pattern.
    pub const SKIP_QUEUES: &str = "SKIP_QUEUES";
    /// The include-queues pattern.
    pub const INCLUDE_QUEUES: &str = "INCLUDE_QUEUES";
}

impl ConfigError {
    /// Creates an `InvalidRegex` error for a pattern field.
    #[must_use]
    pub fn invalid_regex(field: &'static str, pattern: &str, source: regex::Error) -> Self {
        Self::InvalidRegex {
            field,
            pattern: pattern.to_string(),
            source,
        }
    }
}
