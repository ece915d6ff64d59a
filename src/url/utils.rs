//! Small string helpers shared by the classifier, validator and display code.
//!
//! These operate on raw input and never fail. Where a real URL parse is
//! needed (`pretty_url`) a parse failure returns the input unchanged.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::error::NavurlError;
use crate::types::Platform;
use crate::url::classifier::has_explicit_scheme;

/// Characters left alone by `encodeURI`: alphanumerics plus URL punctuation.
const URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

const STRIPPED_PROTOCOLS: [&str; 3] = ["http://", "https://", "file://"];

/// Strip `prefix` from `s`, comparing ASCII case-insensitively.
pub(crate) fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Remove a leading `www.` label.
///
/// # Examples
///
/// ```
/// use navurl::remove_www;
///
/// assert_eq!(remove_www("www.example.com"), "example.com");
/// assert_eq!(remove_www("wwwexample.com"), "wwwexample.com");
/// ```
pub fn remove_www(domain: &str) -> &str {
    domain.strip_prefix("www.").unwrap_or(domain)
}

/// Remove a single trailing slash.
pub fn remove_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Remove an `http`, `https` or `file` protocol from something that is already a URL.
///
/// Input that does not carry a scheme, or carries a different one, is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use navurl::remove_protocol;
///
/// assert_eq!(remove_protocol("HTTPS://example.com/a"), "example.com/a");
/// assert_eq!(remove_protocol("ftp://example.com"), "ftp://example.com");
/// assert_eq!(remove_protocol("example.com"), "example.com");
/// ```
pub fn remove_protocol(url: &str) -> &str {
    if !has_explicit_scheme(url) {
        return url;
    }

    STRIPPED_PROTOCOLS
        .iter()
        .find_map(|proto| strip_prefix_ignore_case(url, proto))
        .unwrap_or(url)
}

/// Extract the lowercase host part of a URL or bare domain.
///
/// The protocol is removed first, then everything from the first `/` or `:`
/// is dropped. A bracketed IPv6 literal is kept whole.
///
/// # Examples
///
/// ```
/// use navurl::get_domain;
///
/// assert_eq!(get_domain("http://Example.com:8080/path"), "example.com");
/// assert_eq!(get_domain("localhost:3000"), "localhost");
/// assert_eq!(get_domain("[::1]:8080/"), "[::1]");
/// ```
pub fn get_domain(url: &str) -> String {
    let rest = remove_protocol(url);

    if rest.starts_with('[') {
        if let Some(end) = rest.find(']') {
            return rest[..=end].to_ascii_lowercase();
        }
    }

    rest.split(['/', ':'])
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// URL without trailing slash, protocol or `www.`, for compact display.
///
/// # Examples
///
/// ```
/// use navurl::basic_url;
///
/// assert_eq!(basic_url("https://www.example.com/"), "example.com");
/// ```
pub fn basic_url(url: &str) -> String {
    remove_www(remove_protocol(remove_trailing_slash(url))).to_string()
}

/// Parse an absolute URL.
pub(crate) fn parse_url(url: &str) -> Result<Url, NavurlError> {
    Ok(Url::parse(url)?)
}

/// Host and path of a URL without trailing slash or `www.`.
///
/// Query and fragment are dropped. Input that does not parse as a URL is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use navurl::pretty_url;
///
/// assert_eq!(pretty_url("https://www.example.com/docs/?page=2"), "example.com/docs");
/// assert_eq!(pretty_url("not a url"), "not a url");
/// ```
pub fn pretty_url(url: &str) -> String {
    match parse_url(url) {
        Ok(parsed) => {
            let joined = format!("{}{}", parsed.host_str().unwrap_or(""), parsed.path());
            remove_www(remove_trailing_slash(&joined)).to_string()
        }
        Err(err) => {
            tracing::trace!(url, %err, "not a url, shown as typed");
            url.to_string()
        }
    }
}

/// Turn a filesystem path into a `file:` URL.
///
/// Characters that cannot appear in a URL are percent-encoded rather than
/// rejected.
///
/// # Examples
///
/// ```
/// use navurl::{file_url, Platform};
///
/// assert_eq!(file_url("/tmp/my file.html", Platform::Unix), "file:///tmp/my%20file.html");
/// assert_eq!(file_url(r"C:\Users\me\a.txt", Platform::Windows), "file:///C:/Users/me/a.txt");
/// assert_eq!(file_url(r"\\server\share\doc.pdf", Platform::Windows), "file://server/share/doc.pdf");
/// ```
pub fn file_url(path: &str, platform: Platform) -> String {
    let raw = match platform {
        Platform::Windows => {
            let path = path.replace('\\', "/");
            if path.starts_with("//") {
                format!("file:{}", path)
            } else {
                format!("file:///{}", path)
            }
        }
        Platform::Unix => format!("file://{}", path),
    };

    utf8_percent_encode(&raw, URI).to_string()
}
