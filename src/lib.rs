//! navurl - address-bar input classification and URL normalization
//!
//! This crate decides what a piece of user-typed address-bar input is and
//! rewrites it into something a browser can load.
//!
//! # Features
//!
//! - **Total**: every input produces a URL; nothing panics or errors
//! - **Ordered**: a fixed precedence decides between URL, domain and search
//! - **IDN-aware**: non-ASCII hosts are converted with IDNA before validation
//! - **HTTPS upgrade**: plaintext URLs for curated domains are rewritten to HTTPS
//! - **Internal pages**: `app:settings` shorthand expands to bundled page URLs
//!
//! # Quick Start
//!
//! ```
//! use navurl::{ClassifiedUrl, UrlParser};
//!
//! let parser = UrlParser::default();
//!
//! assert_eq!(parser.parse("github.com"), "https://github.com");
//! assert_eq!(parser.parse("rust borrow checker"), "https://duckduckgo.com/?q=rust%20borrow%20checker");
//! assert_eq!(parser.parse("app:settings"), "app://app/pages/settings/index.html");
//!
//! assert!(matches!(parser.classify("localhost:3000"), ClassifiedUrl::SchemeMissingDomain(_)));
//! ```
//!
//! # Classification order
//!
//! | Step | Input                       | Result                                   |
//! |------|-----------------------------|------------------------------------------|
//! | 1    | empty after trimming        | blank page                               |
//! | 2    | `view-source:` prefix       | `view-source:` + parse of the remainder  |
//! | 3    | `0x` + 40 hex digits        | special-address pseudo URL               |
//! | 4    | internal shorthand          | expanded internal page URL               |
//! | 5    | explicit scheme             | unchanged, or upgraded to HTTPS          |
//! | 6    | valid bare domain           | `https://` or `http://` prefixed         |
//! | 7    | anything else               | search engine query URL                  |
//!
//! # Suffix matching
//!
//! By default a host is accepted when it ends with any entry of the bundled
//! suffix list, compared as plain strings. [`SuffixMatchMode`] selects a
//! label-boundary variant or the full Public Suffix List instead.

// Re-export the parser and free functions
pub use crate::url::{parse, UrlParser};
pub use crate::url::{
    basic_url, file_url, get_domain, pretty_url, remove_protocol, remove_trailing_slash,
    remove_www,
};
pub use crate::url::{
    contains_whitespace, has_explicit_scheme, is_internal_shorthand, is_internal_url,
    is_special_address, is_view_source,
};
pub use crate::url::{extract_host, validate_domain};
pub use crate::url::{source_url_of, VirtualPage};

// Re-export public types
pub use config::ParserConfig;
pub use error::NavurlError;
pub use knowledge::{
    HttpsUpgradeSet, KnowledgeBase, LocalHosts, SuffixMatchMode, SuffixMatcher, SuffixSet,
};
pub use search::SearchEngine;
pub use types::{ClassifiedUrl, Platform, SpecialAddressKind};

// Module declarations
pub mod config;
pub mod error;
pub mod knowledge;
pub mod search;
pub mod types;
pub mod url;
