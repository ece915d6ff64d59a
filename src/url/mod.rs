//! Address-bar input processing.
//!
//! This module contains the classification and rewriting logic:
//! - Pattern predicates and input classification
//! - Domain validation (grammar, IDNA, local hosts, suffixes)
//! - Internal virtual-page URL expansion and decoding
//! - Normalization into a loadable URL
//! - Display and file-path helpers

pub mod classifier;
pub mod domain;
pub mod normalizer;
pub mod utils;
pub mod virtual_url;

// Re-export main functionality
pub use classifier::{
    contains_whitespace, has_explicit_scheme, is_internal_shorthand, is_internal_url,
    is_special_address, is_view_source, VIEW_SOURCE_PREFIX,
};
pub use domain::{extract_host, is_ipv4_literal, is_ipv6_literal, to_ascii_host, validate_domain};
pub use normalizer::{parse, UrlParser};
pub use utils::{
    basic_url, file_url, get_domain, pretty_url, remove_protocol, remove_trailing_slash,
    remove_www,
};
pub use virtual_url::{canonical_root, source_url_of, VirtualPage};
