//! Error types for knowledge loading, configuration and host conversion.
//!
//! The classification surface itself never fails; these errors only surface
//! from constructors and from the lower-level helpers that back them.

use thiserror::Error;

/// Errors that can occur while building a parser or converting hosts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavurlError {
    /// The host could not be converted to ASCII with IDNA.
    #[error("IDNA conversion failed for host: {0}")]
    Idna(String),

    /// The hostname exceeds the maximum allowed length of 255 bytes.
    #[error("Hostname exceeds maximum length of 255 bytes")]
    HostTooLong,

    /// The host does not match the structural domain grammar.
    #[error("Invalid host syntax: {0}")]
    InvalidHost(String),

    /// A search engine template has no `%s` placeholder.
    #[error("Search URL template must contain %s: {0}")]
    MissingPlaceholder(String),

    /// Bundled or user-supplied knowledge data could not be decoded.
    #[error("Knowledge data error: {0}")]
    KnowledgeData(String),

    /// The configuration file could not be decoded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),
}

impl From<url::ParseError> for NavurlError {
    fn from(err: url::ParseError) -> Self {
        NavurlError::UrlParseError(err.to_string())
    }
}

impl From<serde_json::Error> for NavurlError {
    fn from(err: serde_json::Error) -> Self {
        NavurlError::KnowledgeData(err.to_string())
    }
}

impl From<toml::de::Error> for NavurlError {
    fn from(err: toml::de::Error) -> Self {
        NavurlError::Config(err.to_string())
    }
}
