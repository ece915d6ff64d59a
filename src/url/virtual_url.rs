//! Internal virtual pages and the URLs they represent.
//!
//! Internal pages live under `<scheme>://app/pages/<name>/`. Users may type a
//! shorthand (`app:settings`, `app://settings?tab=privacy`) which expands to
//! the full page URL. Going the other way, [`source_url_of`] recovers what a
//! page URL stands for: an embedded `url` query parameter, or else the
//! shorthand form of the page.

use url::form_urlencoded;

use crate::url::classifier::is_internal_url;
use crate::url::normalizer::UrlParser;
use crate::url::utils::parse_url;

/// Host under the internal scheme that serves bundled pages.
pub const PAGES_HOST: &str = "app";

/// Directory under [`PAGES_HOST`] that holds one folder per page.
pub const PAGES_DIR: &str = "pages";

/// File opened when a shorthand names only the page.
pub const DEFAULT_PAGE_FILE: &str = "index.html";

/// Query key that carries the represented source URL.
pub const REPRESENTED_URL_KEY: &str = "url";

/// Root every canonical internal URL starts with, e.g. `app://app/`.
pub fn canonical_root(scheme: &str) -> String {
    format!("{}://{}/", scheme, PAGES_HOST)
}

/// A bundled page plus the optional sub-path and query it was opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualPage {
    /// Page folder name (`settings`).
    pub name: String,
    /// Path below the page folder; `None` means the default page file.
    pub sub_path: Option<String>,
    /// Raw query string without the leading `?`.
    pub query: Option<String>,
}

impl VirtualPage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sub_path: None,
            query: None,
        }
    }

    pub fn with_sub_path(mut self, sub_path: impl Into<String>) -> Self {
        self.sub_path = Some(sub_path.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Decompose shorthand such as `app:settings/advanced?x=1`.
    ///
    /// Returns `None` when the input does not start with `<scheme>:` or names
    /// no page.
    pub fn from_shorthand(input: &str, scheme: &str) -> Option<Self> {
        let rest = input.strip_prefix(scheme)?.strip_prefix(':')?;
        let rest = rest.strip_prefix("//").unwrap_or(rest);

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        let (name, sub_path) = match path.split_once('/') {
            Some((name, sub)) => (name, Some(sub)),
            None => (path, None),
        };

        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            sub_path: sub_path.filter(|s| !s.is_empty()).map(str::to_string),
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
        })
    }

    /// Embed the URL this page is showing as the `url` query parameter.
    pub fn with_represented_url(mut self, source_url: &str) -> Self {
        let encoded: String = form_urlencoded::Serializer::new(String::new())
            .append_pair(REPRESENTED_URL_KEY, source_url)
            .finish();

        self.query = Some(match self.query.take() {
            Some(existing) => format!("{}&{}", existing, encoded),
            None => encoded,
        });
        self
    }

    /// Full internal URL for this page.
    ///
    /// # Examples
    ///
    /// ```
    /// use navurl::VirtualPage;
    ///
    /// let page = VirtualPage::new("settings").with_query("tab=privacy");
    /// assert_eq!(
    ///     page.to_internal_url("app"),
    ///     "app://app/pages/settings/index.html?tab=privacy"
    /// );
    /// ```
    pub fn to_internal_url(&self, scheme: &str) -> String {
        let mut url = format!(
            "{}{}/{}/{}",
            canonical_root(scheme),
            PAGES_DIR,
            self.name,
            self.sub_path.as_deref().unwrap_or(DEFAULT_PAGE_FILE)
        );

        if let Some(query) = &self.query {
            url.push('?');
            url.push_str(query);
        }
        url
    }
}

/// Page name from the first `/pages/<letters>/` segment of an internal URL.
fn page_name(url: &str) -> Option<&str> {
    let marker = format!("/{}/", PAGES_DIR);

    url.match_indices(&marker).find_map(|(start, _)| {
        let rest = &url[start + marker.len()..];
        let len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphabetic())
            .count();

        (len > 0 && rest[len..].starts_with('/')).then(|| &rest[..len])
    })
}

/// Recover the URL an internal page stands for.
///
/// Non-internal input, and input that fails to parse, is returned unchanged.
///
/// # Examples
///
/// ```
/// use navurl::source_url_of;
///
/// assert_eq!(
///     source_url_of("app://app/pages/reader/index.html?url=https%3A%2F%2Fexample.com%2F", "app"),
///     "https://example.com/"
/// );
/// assert_eq!(
///     source_url_of("app://app/pages/settings/index.html?tab=privacy", "app"),
///     "app://settings?tab=privacy"
/// );
/// assert_eq!(source_url_of("https://example.com", "app"), "https://example.com");
/// ```
pub fn source_url_of(url: &str, scheme: &str) -> String {
    if !is_internal_url(url, scheme) {
        return url.to_string();
    }

    let parsed = match parse_url(url) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::trace!(url, %err, "internal url did not parse");
            return url.to_string();
        }
    };

    let represented = parsed
        .query_pairs()
        .find(|(key, _)| key == REPRESENTED_URL_KEY)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty());

    if let Some(represented) = represented {
        return represented;
    }

    match page_name(url) {
        Some(page) => {
            let search = parsed
                .query()
                .filter(|q| !q.is_empty())
                .map(|q| format!("?{}", q))
                .unwrap_or_default();
            format!("{}://{}{}", scheme, page, search)
        }
        None => url.to_string(),
    }
}

impl UrlParser {
    /// Expand internal shorthand into the full internal page URL.
    ///
    /// Input that is not shorthand is returned unchanged.
    pub fn to_internal_form(&self, shorthand: &str) -> String {
        match VirtualPage::from_shorthand(shorthand, self.internal_scheme()) {
            Some(page) if !shorthand.starts_with(&canonical_root(self.internal_scheme())) => {
                page.to_internal_url(self.internal_scheme())
            }
            _ => shorthand.to_string(),
        }
    }

    /// Recover the URL an internal page stands for, using this parser's scheme.
    pub fn source_url_of(&self, url: &str) -> String {
        source_url_of(url, self.internal_scheme())
    }

    /// Internal URL of `page` showing `source_url`.
    pub fn represent(&self, page: &str, source_url: &str) -> String {
        VirtualPage::new(page)
            .with_represented_url(source_url)
            .to_internal_url(self.internal_scheme())
    }
}
