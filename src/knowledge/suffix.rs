//! Public suffix data and the matchers that consult it.
//!
//! The flattened suffix list is matched with a plain end-of-string test by
//! default. That test has no notion of label boundaries, so a suffix entry
//! such as `om` also accepts `custom`. [`LabelBoundaryMatcher`] and
//! [`PublicSuffixListMatcher`] implement stricter rules behind the same
//! [`SuffixMatcher`] trait.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use psl::{List, Psl};
use serde::{Deserialize, Serialize};

use crate::error::NavurlError;

/// Decides whether a host ends in a recognized public suffix.
pub trait SuffixMatcher: Send + Sync + fmt::Debug {
    /// Check if `host` (lowercase ASCII) is accepted.
    fn matches(&self, host: &str) -> bool;
}

/// Ordered, immutable list of suffix strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuffixSet {
    entries: Vec<String>,
}

impl SuffixSet {
    /// Build a set from raw entries.
    ///
    /// Entries are lowercased; empty entries and duplicates are dropped and
    /// the first occurrence keeps its position.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .map(|s| s.as_ref().trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();

        Self { entries }
    }

    /// Decode a JSON array of suffix strings.
    pub fn from_json(json: &str) -> Result<Self, NavurlError> {
        let entries: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// First entry that `host` ends with, compared as plain strings.
    pub fn find_plain(&self, host: &str) -> Option<&str> {
        self.iter().find(|suffix| host.ends_with(suffix))
    }

    /// First entry that `host` ends with on a label boundary.
    ///
    /// A leading dot on the entry is ignored, so `.co.uk` and `co.uk`
    /// behave the same.
    pub fn find_on_boundary(&self, host: &str) -> Option<&str> {
        self.iter().find(|entry| {
            let suffix = entry.trim_start_matches('.');
            if suffix.is_empty() {
                return false;
            }
            match host.strip_suffix(suffix) {
                Some("") => true,
                Some(rest) => rest.ends_with('.'),
                None => false,
            }
        })
    }
}

/// End-of-string matching against every entry of a [`SuffixSet`].
#[derive(Debug, Clone)]
pub struct PlainSuffixMatcher {
    set: Arc<SuffixSet>,
}

impl PlainSuffixMatcher {
    pub fn new(set: Arc<SuffixSet>) -> Self {
        Self { set }
    }
}

impl SuffixMatcher for PlainSuffixMatcher {
    fn matches(&self, host: &str) -> bool {
        self.set.find_plain(host).is_some()
    }
}

/// Like [`PlainSuffixMatcher`], but the suffix must start a label.
#[derive(Debug, Clone)]
pub struct LabelBoundaryMatcher {
    set: Arc<SuffixSet>,
}

impl LabelBoundaryMatcher {
    pub fn new(set: Arc<SuffixSet>) -> Self {
        Self { set }
    }
}

impl SuffixMatcher for LabelBoundaryMatcher {
    fn matches(&self, host: &str) -> bool {
        self.set.find_on_boundary(host).is_some()
    }
}

/// Full Public Suffix List rules (wildcards and exceptions) from the `psl` crate.
///
/// Ignores the loaded [`SuffixSet`] entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixListMatcher;

impl SuffixMatcher for PublicSuffixListMatcher {
    fn matches(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.');
        if host.is_empty() {
            return false;
        }
        List.suffix(host.as_bytes())
            .map(|suffix| suffix.is_known())
            .unwrap_or(false)
    }
}

/// Which suffix matcher a parser uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuffixMatchMode {
    /// Plain end-of-string match against the flattened list.
    #[default]
    Plain,
    /// End-of-string match that respects label boundaries.
    LabelBoundary,
    /// The compiled Public Suffix List from the `psl` crate.
    PublicSuffixList,
}

impl SuffixMatchMode {
    /// Build the matcher for this mode over `set`.
    pub fn matcher(self, set: Arc<SuffixSet>) -> Arc<dyn SuffixMatcher> {
        match self {
            SuffixMatchMode::Plain => Arc::new(PlainSuffixMatcher::new(set)),
            SuffixMatchMode::LabelBoundary => Arc::new(LabelBoundaryMatcher::new(set)),
            SuffixMatchMode::PublicSuffixList => Arc::new(PublicSuffixListMatcher),
        }
    }
}
