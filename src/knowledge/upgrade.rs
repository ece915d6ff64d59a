//! Curated set of domains known to serve valid HTTPS.

use std::collections::HashSet;

use crate::error::NavurlError;
use crate::url::utils::remove_www;

/// Bare (www-stripped) domains whose plaintext URLs are rewritten to HTTPS.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpsUpgradeSet {
    domains: HashSet<String>,
}

impl HttpsUpgradeSet {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| remove_www(d.as_ref().trim()).to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();

        Self { domains }
    }

    /// Decode a JSON array of domain strings.
    pub fn from_json(json: &str) -> Result<Self, NavurlError> {
        let domains: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::new(domains))
    }

    /// Exact membership test; `domain` must already be www-stripped.
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
