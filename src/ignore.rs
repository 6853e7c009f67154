//! Ignore specification for scans.
//!
//! An ignore spec is a list of prefix strings compared against each visited
//! entry's root-relative path. Matching is plain string prefix, not
//! path-segment aware: `src` also matches `src-old/main.rs`. A matching
//! directory is pruned so nothing beneath it is ever opened.

use serde::{Deserialize, Serialize};

/// Immutable set of relative path prefixes to exclude from a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoreSpec {
    prefixes: Vec<String>,
}

impl IgnoreSpec {
    /// Spec that ignores nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from individual prefixes. Empty prefixes are dropped; an empty
    /// prefix would match every path.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|p: &String| !p.is_empty())
            .collect();
        Self { prefixes }
    }

    /// Parse a comma-separated list such as `build,target,.git`.
    ///
    /// Segments are not trimmed: `"a, b"` yields the prefixes `a` and ` b`.
    pub fn from_comma_list(list: &str) -> Self {
        if list.is_empty() {
            return Self::empty();
        }
        Self::new(list.split(','))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Whether a root-relative path is excluded.
    pub fn is_ignored(&self, relative: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| relative.starts_with(prefix.as_str()))
    }
}
