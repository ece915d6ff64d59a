//! Address-bar input normalization.
//!
//! [`UrlParser::parse`] turns whatever the user typed into something a
//! browser can load: an explicit URL, an expanded internal page, a
//! special-address pseudo URL, or a search query URL.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::config::ParserConfig;
use crate::error::NavurlError;
use crate::knowledge::{KnowledgeBase, LocalHosts, SuffixMatchMode, SuffixMatcher};
use crate::search::SearchEngine;
use crate::types::ClassifiedUrl;
use crate::url::classifier::{is_internal_url, VIEW_SOURCE_PREFIX};
use crate::url::utils::{get_domain, remove_www, strip_prefix_ignore_case};

static DEFAULT_PARSER: Lazy<UrlParser> = Lazy::new(UrlParser::default);

/// Normalize input with the bundled knowledge and default settings.
///
/// # Examples
///
/// ```
/// assert_eq!(navurl::parse(""), "about:blank");
/// assert_eq!(navurl::parse("github.com/rust-lang"), "https://github.com/rust-lang");
/// assert_eq!(navurl::parse("example.org"), "http://example.org");
/// assert_eq!(navurl::parse("what is rust"), "https://duckduckgo.com/?q=what%20is%20rust");
/// ```
pub fn parse(input: &str) -> String {
    DEFAULT_PARSER.parse(input)
}

/// Classifies and normalizes address-bar input.
///
/// Cloning is cheap: the knowledge sets are shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct UrlParser {
    knowledge: KnowledgeBase,
    suffix_matcher: Arc<dyn SuffixMatcher>,
    local_hosts: Arc<LocalHosts>,
    search_engine: SearchEngine,
    internal_scheme: String,
    special_address_scheme: String,
    blank_page: String,
}

impl UrlParser {
    /// Create a parser over `knowledge` with default settings.
    pub fn new(knowledge: KnowledgeBase) -> Self {
        let defaults = ParserConfig::default();
        let suffix_matcher = defaults.suffix_matching.matcher(knowledge.suffixes.clone());

        Self {
            knowledge,
            suffix_matcher,
            local_hosts: Arc::new(LocalHosts::new(&defaults.local_hosts)),
            search_engine: defaults.search_engine,
            internal_scheme: defaults.internal_scheme,
            special_address_scheme: defaults.special_address_scheme,
            blank_page: defaults.blank_page,
        }
    }

    /// Create a parser over the bundled knowledge from a configuration.
    pub fn from_config(config: &ParserConfig) -> Result<Self, NavurlError> {
        Self::with_knowledge_and_config(KnowledgeBase::bundled(), config)
    }

    pub fn with_knowledge_and_config(
        knowledge: KnowledgeBase,
        config: &ParserConfig,
    ) -> Result<Self, NavurlError> {
        let search_engine = SearchEngine::new(
            config.search_engine.name.clone(),
            config.search_engine.search_url.clone(),
        )?;

        Ok(Self::new(knowledge)
            .with_suffix_mode(config.suffix_matching)
            .with_local_hosts(LocalHosts::new(&config.local_hosts))
            .with_search_engine(search_engine)
            .with_internal_scheme(config.internal_scheme.clone())
            .with_special_address_scheme(config.special_address_scheme.clone())
            .with_blank_page(config.blank_page.clone()))
    }

    /// Switch to one of the built-in suffix matchers.
    pub fn with_suffix_mode(mut self, mode: SuffixMatchMode) -> Self {
        self.suffix_matcher = mode.matcher(self.knowledge.suffixes.clone());
        self
    }

    /// Use a custom suffix matcher.
    pub fn with_suffix_matcher(mut self, matcher: Arc<dyn SuffixMatcher>) -> Self {
        self.suffix_matcher = matcher;
        self
    }

    pub fn with_local_hosts(mut self, local_hosts: LocalHosts) -> Self {
        self.local_hosts = Arc::new(local_hosts);
        self
    }

    pub fn with_search_engine(mut self, search_engine: SearchEngine) -> Self {
        self.search_engine = search_engine;
        self
    }

    pub fn with_internal_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.internal_scheme = scheme.into();
        self
    }

    pub fn with_special_address_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.special_address_scheme = scheme.into();
        self
    }

    pub fn with_blank_page(mut self, blank_page: impl Into<String>) -> Self {
        self.blank_page = blank_page.into();
        self
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn suffix_matcher(&self) -> &dyn SuffixMatcher {
        self.suffix_matcher.as_ref()
    }

    pub fn local_hosts(&self) -> &LocalHosts {
        &self.local_hosts
    }

    pub fn search_engine(&self) -> &SearchEngine {
        &self.search_engine
    }

    pub fn internal_scheme(&self) -> &str {
        &self.internal_scheme
    }

    pub fn special_address_scheme(&self) -> &str {
        &self.special_address_scheme
    }

    pub fn blank_page(&self) -> &str {
        &self.blank_page
    }

    /// Check if the input points into the internal scheme.
    pub fn is_internal_url(&self, url: &str) -> bool {
        is_internal_url(url, &self.internal_scheme)
    }

    /// Check if the domain of `url` is in the HTTPS upgrade table.
    ///
    /// The protocol and a leading `www.` are ignored.
    pub fn is_https_upgradable(&self, url: &str) -> bool {
        let domain = get_domain(url);
        self.knowledge.https_upgrade.contains(remove_www(&domain))
    }

    /// Normalize address-bar input into a loadable URL. Never fails.
    pub fn parse(&self, input: &str) -> String {
        let classified = self.classify(input);
        tracing::debug!(kind = classified.tag(), "classified input");
        self.render(&classified)
    }

    /// Produce the final URL for an already classified input.
    pub fn render(&self, classified: &ClassifiedUrl) -> String {
        match classified {
            ClassifiedUrl::Blank => self.blank_page.clone(),
            ClassifiedUrl::ViewSourceWrapped { depth, inner } => {
                format!("{}{}", VIEW_SOURCE_PREFIX.repeat(*depth), self.render(inner))
            }
            ClassifiedUrl::SpecialAddress { address, .. } => {
                format!("{}://{}", self.special_address_scheme, address)
            }
            ClassifiedUrl::InternalVirtualUrl(page) => page.to_internal_url(&self.internal_scheme),
            ClassifiedUrl::FullUrl(url) => self.upgrade_full_url(url),
            ClassifiedUrl::SchemeMissingDomain(domain) => {
                if self.is_https_upgradable(domain) {
                    format!("https://{}", domain)
                } else {
                    format!("http://{}", domain)
                }
            }
            ClassifiedUrl::FreeTextQuery(text) => self.search_engine.query_url(text),
        }
    }

    fn upgrade_full_url(&self, url: &str) -> String {
        if self.is_internal_url(url) {
            return url.to_string();
        }

        match strip_prefix_ignore_case(url, "http://") {
            Some(rest) if self.is_https_upgradable(rest) => {
                let domain = get_domain(rest);
                tracing::debug!(domain = domain.as_str(), "upgraded to https");
                format!("https://{}", rest)
            }
            _ => url.to_string(),
        }
    }
}

impl Default for UrlParser {
    fn default() -> Self {
        Self::new(KnowledgeBase::bundled())
    }
}
