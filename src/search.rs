//! Search engine query templates, the terminal fallback for free text.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::NavurlError;

/// Placeholder replaced by the encoded query.
pub const QUERY_PLACEHOLDER: &str = "%s";

/// Characters left alone by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A search provider described by a query-URL template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEngine {
    /// Display name.
    pub name: String,
    /// Query URL with a `%s` placeholder.
    pub search_url: String,
}

impl SearchEngine {
    /// Create a search engine, checking that the template has a placeholder.
    pub fn new(name: impl Into<String>, search_url: impl Into<String>) -> Result<Self, NavurlError> {
        let search_url = search_url.into();
        if !search_url.contains(QUERY_PLACEHOLDER) {
            return Err(NavurlError::MissingPlaceholder(search_url));
        }

        Ok(Self {
            name: name.into(),
            search_url,
        })
    }

    pub fn duckduckgo() -> Self {
        Self {
            name: "DuckDuckGo".to_string(),
            search_url: "https://duckduckgo.com/?q=%s".to_string(),
        }
    }

    /// Query URL for `text`, percent-encoded like `encodeURIComponent`.
    ///
    /// Only the first placeholder is replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use navurl::SearchEngine;
    ///
    /// let engine = SearchEngine::duckduckgo();
    /// assert_eq!(engine.query_url("rust & c++"), "https://duckduckgo.com/?q=rust%20%26%20c%2B%2B");
    /// ```
    pub fn query_url(&self, text: &str) -> String {
        let encoded = utf8_percent_encode(text, COMPONENT).to_string();
        self.search_url.replacen(QUERY_PLACEHOLDER, &encoded, 1)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::duckduckgo()
    }
}
