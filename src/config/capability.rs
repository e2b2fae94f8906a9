//! Optional broker capabilities toggled through `RABBIT_CAPABILITIES`.
//!
//! Capabilities are validated against a fixed allow-list. Unknown names are
//! dropped silently; there is no error path.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A named optional behavior the exporter can use against the broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Ask the management API not to sort result lists.
    NoSort,
    /// Request the BERT binary encoding instead of JSON.
    Bert,
}

impl Capability {
    /// Every capability the exporter knows about.
    pub const ALL: [Self; 2] = [Self::NoSort, Self::Bert];

    /// The name used in `RABBIT_CAPABILITIES`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoSort => "no_sort",
            Self::Bert => "bert",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name is not on the capability allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown capability '{0}'")]
pub struct UnknownCapability(pub String);

impl FromStr for Capability {
    type Err = UnknownCapability;

    /// Case-sensitive lookup: `"no_sort"` is known, `"NO_SORT"` is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cap| cap.as_str() == s)
            .ok_or_else(|| UnknownCapability(s.to_string()))
    }
}

/// Set of enabled capabilities.
///
/// Membership means enabled; absence means disabled. Ordering is
/// deterministic so the set renders stably in logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    enabled: BTreeSet<Capability>,
}

impl CapabilitySet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: BTreeSet::new(),
        }
    }

    /// Parses a comma-separated list of capability names.
    ///
    /// Tokens are trimmed and matched case-sensitively; unknown tokens
    /// and empty tokens are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rabbit_exporter::config::{Capability, CapabilitySet};
    ///
    /// let caps = CapabilitySet::parse("bert, no_sort, bogus");
    /// assert_eq!(caps.len(), 2);
    /// assert!(caps.contains(Capability::Bert));
    /// assert!(caps.contains(Capability::NoSort));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.split(',')
            .map(str::trim)
            .filter_map(|token| token.parse::<Capability>().ok())
            .collect()
    }

    /// Enables a capability. Returns `false` if it was already enabled.
    pub fn insert(&mut self, capability: Capability) -> bool {
        self.enabled.insert(capability)
    }

    /// Returns `true` if the capability is enabled.
    #[must_use]
    pub fn contains(&self, capability: Capability) -> bool {
        self.enabled.contains(&capability)
    }

    /// Returns `true` if `name` is a known capability and it is enabled.
    #[must_use]
    pub fn is_enabled_by_name(&self, name: &str) -> bool {
        name.parse::<Capability>()
            .is_ok_and(|capability| self.contains(capability))
    }

    /// Iterates over enabled capabilities in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.enabled.iter().copied()
    }

    /// Returns true if no capability is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Returns the number of enabled capabilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enabled.len()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self {
            enabled: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(Capability::as_str).collect();
        f.write_str(&names.join(","))
    }
}

impl serde::Serialize for CapabilitySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(Capability::as_str))
    }
}
