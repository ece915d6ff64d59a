//! Predicates that decide what a piece of address-bar input is.
//!
//! The precedence order in [`UrlParser::classify`] matters: moving a check
//! changes which variant an input lands in.

use crate::url::normalizer::UrlParser;
use crate::types::{ClassifiedUrl, SpecialAddressKind};
use crate::url::utils::get_domain;
use crate::url::virtual_url::{canonical_root, VirtualPage};

/// Prefix that asks for the page source of whatever follows it.
pub const VIEW_SOURCE_PREFIX: &str = "view-source:";

/// Schemes that never use `//` but are still treated as URLs.
const RESERVED_SCHEME_PREFIXES: [&str; 3] = ["about:", "chrome:", "data:"];

const HEX_ADDRESS_DIGITS: usize = 40;

/// Check if the input already carries a scheme.
///
/// True for `^[a-z0-9]+://` (any case) and for the reserved `about:`,
/// `chrome:` and `data:` prefixes. The scheme itself is not validated.
///
/// # Examples
///
/// ```
/// use navurl::has_explicit_scheme;
///
/// assert!(has_explicit_scheme("HTTPS://example.com"));
/// assert!(has_explicit_scheme("gopher://example.com"));
/// assert!(has_explicit_scheme("about:blank"));
/// assert!(!has_explicit_scheme("example.com"));
/// assert!(!has_explicit_scheme("mailto:someone@example.com"));
/// ```
pub fn has_explicit_scheme(input: &str) -> bool {
    let scheme_len = input
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();

    if scheme_len > 0 && input[scheme_len..].starts_with("://") {
        return true;
    }

    RESERVED_SCHEME_PREFIXES
        .iter()
        .any(|prefix| input.starts_with(prefix))
}

/// Check if the input is a `0x`-prefixed 40-digit hex address, in any case.
pub fn is_special_address(input: &str) -> bool {
    match input.get(..2) {
        Some("0x") | Some("0X") => {}
        _ => return false,
    }

    let digits = &input[2..];
    digits.len() == HEX_ADDRESS_DIGITS && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Check if the input starts with `view-source:`.
pub fn is_view_source(input: &str) -> bool {
    input.starts_with(VIEW_SOURCE_PREFIX)
}

/// Check if the input points into the internal scheme (`<scheme>://...`).
pub fn is_internal_url(input: &str, scheme: &str) -> bool {
    input
        .strip_prefix(scheme)
        .map_or(false, |rest| rest.starts_with("://"))
}

/// Check if the input is internal shorthand that still needs expanding.
///
/// `app:settings` and `app://settings` qualify; anything already under the
/// virtual-page root (`app://app/...`) does not.
pub fn is_internal_shorthand(input: &str, scheme: &str) -> bool {
    let starts_with_scheme = input
        .strip_prefix(scheme)
        .map_or(false, |rest| rest.starts_with(':'));

    starts_with_scheme && !input.starts_with(&canonical_root(scheme))
}

/// Check if the input contains any whitespace. Domains never do.
pub fn contains_whitespace(input: &str) -> bool {
    input.chars().any(char::is_whitespace)
}

impl UrlParser {
    /// Decide what `input` is.
    ///
    /// Checks run in a fixed order and the first match wins:
    /// blank, `view-source:`, special address, internal shorthand, explicit
    /// scheme, bare domain, and finally free text.
    ///
    /// Stacked `view-source:` prefixes are counted in a loop, so arbitrarily
    /// deep nesting costs no stack.
    pub fn classify(&self, input: &str) -> ClassifiedUrl {
        let mut input = input.trim();
        let mut depth = 0;

        while let Some(inner) = input.strip_prefix(VIEW_SOURCE_PREFIX) {
            depth += 1;
            input = inner.trim();
        }

        let classified = self.classify_unwrapped(input);
        if depth == 0 {
            return classified;
        }

        ClassifiedUrl::ViewSourceWrapped {
            depth,
            inner: Box::new(classified),
        }
    }

    /// Classify trimmed input that carries no `view-source:` prefix.
    fn classify_unwrapped(&self, input: &str) -> ClassifiedUrl {
        if input.is_empty() {
            return ClassifiedUrl::Blank;
        }

        if is_special_address(input) {
            return ClassifiedUrl::SpecialAddress {
                kind: SpecialAddressKind::HexAccount,
                address: input.to_string(),
            };
        }

        if is_internal_shorthand(input, self.internal_scheme()) {
            if let Some(page) = VirtualPage::from_shorthand(input, self.internal_scheme()) {
                return ClassifiedUrl::InternalVirtualUrl(page);
            }
        }

        if has_explicit_scheme(input) {
            return ClassifiedUrl::FullUrl(input.to_string());
        }

        if !contains_whitespace(input) && self.validate_domain(&get_domain(input)) {
            return ClassifiedUrl::SchemeMissingDomain(input.to_string());
        }

        ClassifiedUrl::FreeTextQuery(input.to_string())
    }

    /// Cheap pre-check used while the user is still typing.
    ///
    /// True for explicit URLs, special addresses and local hosts. Public
    /// suffix validation is deliberately skipped here.
    pub fn is_possible_url(&self, input: &str) -> bool {
        if has_explicit_scheme(input) || is_special_address(input) {
            return true;
        }

        if input.contains(' ') {
            return false;
        }

        self.local_hosts().contains(&get_domain(input))
    }
}
