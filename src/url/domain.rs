//! Structural and suffix-based validation of bare domains.

use crate::error::NavurlError;
use crate::knowledge::{LocalHosts, SuffixMatcher};
use crate::url::normalizer::UrlParser;

/// Maximum length of a host after IDNA conversion.
pub const MAX_HOST_LENGTH: usize = 255;

/// Convert a host to its ASCII form, applying IDNA only when needed.
///
/// Pure-ASCII hosts are passed through untouched so that characters such as
/// `_`, which UTS-46 would reject, stay valid here.
pub fn to_ascii_host(host: &str) -> Result<String, NavurlError> {
    if host.is_ascii() {
        return Ok(host.to_string());
    }

    idna::domain_to_ascii(host).map_err(|_| NavurlError::Idna(host.to_string()))
}

/// Pull the host out of a domain candidate and check its shape.
///
/// Any `user@` prefix is discarded, as is a single trailing root dot. The
/// result is lowercase ASCII and is either a bracketed IPv6 literal or at
/// least two characters of `[a-z0-9-._]` that do not start with `-` and end
/// with a letter or digit.
pub fn extract_host(candidate: &str) -> Result<String, NavurlError> {
    if candidate.starts_with('-') {
        return Err(NavurlError::InvalidHost(candidate.to_string()));
    }

    let host = match candidate.rfind('@') {
        Some(at) => &candidate[at + 1..],
        None => candidate,
    };

    // fully qualified form, `example.com.`
    let host = host.strip_suffix('.').unwrap_or(host);
    let host = to_ascii_host(host)?.to_ascii_lowercase();

    if !is_ipv6_literal(&host) && !is_host_syntax(&host) {
        return Err(NavurlError::InvalidHost(host));
    }

    if host.len() > MAX_HOST_LENGTH {
        return Err(NavurlError::HostTooLong);
    }

    Ok(host)
}

fn is_host_syntax(host: &str) -> bool {
    let bytes = host.as_bytes();

    match (bytes.first(), bytes.last()) {
        (Some(b'-'), _) | (None, _) => return false,
        (_, Some(last)) if !last.is_ascii_alphanumeric() => return false,
        _ => {}
    }

    bytes.len() >= 2
        && bytes
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_'))
}

/// Check if the host is a dotted quad of one to three digit groups.
///
/// Group values are not range-checked, matching how the address bar has
/// always treated them.
pub fn is_ipv4_literal(host: &str) -> bool {
    let groups: Vec<&str> = host.split('.').collect();

    groups.len() == 4
        && groups
            .iter()
            .all(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()))
}

/// Check if the host is a bracketed IPv6 literal such as `[::1]`.
pub fn is_ipv6_literal(host: &str) -> bool {
    host.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map_or(false, |inner| {
            !inner.is_empty()
                && inner
                    .bytes()
                    .all(|b| b == b':' || b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        })
}

/// Validate a bare domain against the grammar, the local hosts and the suffix list.
///
/// Returns `false` on any failure, including IDNA conversion errors.
pub fn validate_domain(candidate: &str, local_hosts: &LocalHosts, suffixes: &dyn SuffixMatcher) -> bool {
    let host = match extract_host(candidate) {
        Ok(host) => host,
        Err(err) => {
            tracing::trace!(candidate, %err, "rejected domain candidate");
            return false;
        }
    };

    if is_ipv4_literal(&host) || is_ipv6_literal(&host) || local_hosts.contains(&host) {
        return true;
    }

    let accepted = suffixes.matches(&host);
    if !accepted {
        tracing::trace!(host = host.as_str(), "no known suffix");
    }
    accepted
}

impl UrlParser {
    /// Validate a bare domain with this parser's local hosts and suffix matcher.
    pub fn validate_domain(&self, candidate: &str) -> bool {
        validate_domain(candidate, self.local_hosts(), self.suffix_matcher())
    }
}
