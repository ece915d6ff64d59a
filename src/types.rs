//! Core data structures for input classification.

use crate::url::virtual_url::VirtualPage;

/// The kind of fixed-format address recognized by shape alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialAddressKind {
    /// `0x` followed by 40 hex digits (an EVM-style account address).
    HexAccount,
}

/// What a piece of address-bar input turned out to be.
///
/// Exactly one variant applies to any input. Variants are produced by
/// [`crate::UrlParser::classify`] in a fixed precedence order.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedUrl {
    /// Nothing left after trimming.
    Blank,
    /// Input wrapped in one or more `view-source:` prefixes.
    ViewSourceWrapped {
        /// Number of stacked prefixes, at least one.
        depth: usize,
        /// Classification of the remainder; never itself wrapped.
        inner: Box<ClassifiedUrl>,
    },
    /// A fixed-format address such as a hex account.
    SpecialAddress {
        /// Shape that matched.
        kind: SpecialAddressKind,
        /// The address exactly as typed.
        address: String,
    },
    /// Shorthand reference to an internal page (`app:settings`).
    InternalVirtualUrl(VirtualPage),
    /// Input that already carries a scheme.
    FullUrl(String),
    /// A bare host (plus optional path) that validated as a domain.
    SchemeMissingDomain(String),
    /// Anything else; sent to the search engine.
    FreeTextQuery(String),
}

impl ClassifiedUrl {
    /// Short stable name of the variant, used for logging and the CLI.
    pub fn tag(&self) -> &'static str {
        match self {
            ClassifiedUrl::Blank => "blank",
            ClassifiedUrl::ViewSourceWrapped { .. } => "view-source",
            ClassifiedUrl::SpecialAddress { .. } => "special-address",
            ClassifiedUrl::InternalVirtualUrl(_) => "internal",
            ClassifiedUrl::FullUrl(_) => "url",
            ClassifiedUrl::SchemeMissingDomain(_) => "domain",
            ClassifiedUrl::FreeTextQuery(_) => "search",
        }
    }

    /// Check if the input will be sent to the search engine.
    pub fn is_search(&self) -> bool {
        matches!(self, ClassifiedUrl::FreeTextQuery(_))
    }
}

/// Platform convention used when turning a filesystem path into a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Backslash separators, drive letters and UNC shares.
    Windows,
    /// Everything else.
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}
