//! Parser configuration, read from TOML.
//!
//! Every field has a default, so an empty file is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NavurlError;
use crate::knowledge::SuffixMatchMode;
use crate::search::SearchEngine;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Address returned for empty input.
    pub blank_page: String,
    /// Scheme of internal virtual pages (`app` in `app://app/pages/...`).
    pub internal_scheme: String,
    /// Pseudo-scheme special addresses are rewritten to.
    pub special_address_scheme: String,
    /// Provider used for free-text queries.
    pub search_engine: SearchEngine,
    /// Intranet host names accepted without suffix validation.
    pub local_hosts: Vec<String>,
    /// How hosts are matched against the suffix list.
    pub suffix_matching: SuffixMatchMode,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            blank_page: "about:blank".to_string(),
            internal_scheme: "app".to_string(),
            special_address_scheme: "specialaddress".to_string(),
            search_engine: SearchEngine::default(),
            local_hosts: vec!["localhost".to_string()],
            suffix_matching: SuffixMatchMode::default(),
        }
    }
}

impl ParserConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, NavurlError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and decode a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, NavurlError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| NavurlError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("loaded parser config from {}", path.display());
        Ok(config)
    }
}
