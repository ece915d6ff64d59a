//! Integration tests for the normalization policy.
//!
//! These tests pin down the precedence order between URLs, domains,
//! internal pages, special addresses and search.

use navurl::*;

const ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

fn parser(suffixes: &[&str], upgrades: &[&str]) -> UrlParser {
    UrlParser::new(KnowledgeBase::new(
        SuffixSet::new(suffixes.iter().copied()),
        HttpsUpgradeSet::new(upgrades.iter().copied()),
    ))
}

#[test]
fn test_blank_inputs() {
    let p = UrlParser::default();
    assert_eq!(p.parse(""), "about:blank");
    assert_eq!(p.parse("   "), "about:blank");
}

#[test]
fn test_bare_suffix_domain() {
    assert_eq!(parser(&["example"], &["example"]).parse("example"), "https://example");
    assert_eq!(parser(&["example"], &[]).parse("example"), "http://example");
}

#[test]
fn test_free_text_goes_to_search() {
    let p = UrlParser::default();
    assert_eq!(
        p.parse("not a domain with spaces"),
        "https://duckduckgo.com/?q=not%20a%20domain%20with%20spaces"
    );

    let custom = UrlParser::default()
        .with_search_engine(SearchEngine::new("Example", "https://search.example/?query=%s&lang=en").unwrap());
    assert_eq!(
        custom.parse("what is 1+1?"),
        "https://search.example/?query=what%20is%201%2B1%3F&lang=en"
    );
}

#[test]
fn test_special_address_any_case() {
    let p = UrlParser::default();
    for address in [ADDRESS.to_string(), ADDRESS.to_lowercase(), ADDRESS.to_uppercase().replacen("0X", "0x", 1)] {
        assert_eq!(p.parse(&address), format!("specialaddress://{}", address));
    }
    assert_eq!(p.parse(&format!("  {}  ", ADDRESS)), format!("specialaddress://{}", ADDRESS));
}

#[test]
fn test_view_source_wraps_inner_result() {
    let p = UrlParser::default();
    let inputs = ["http://example.com", "http://github.com/rust-lang", "github.com", "two words", ""];
    for inner in inputs {
        assert_eq!(
            p.parse(&format!("view-source:{}", inner)),
            format!("view-source:{}", p.parse(inner)),
            "view-source wrapping failed for {:?}",
            inner
        );
    }
    assert_eq!(p.parse("view-source:http://github.com"), "view-source:https://github.com");
}

#[test]
fn test_view_source_nesting_has_no_depth_limit() {
    let p = UrlParser::default();
    let input = format!("{}example.com", "view-source:".repeat(10_000));

    match p.classify(&input) {
        ClassifiedUrl::ViewSourceWrapped { depth, inner } => {
            assert_eq!(depth, 10_000);
            assert_eq!(*inner, ClassifiedUrl::SchemeMissingDomain("example.com".to_string()));
        }
        other => panic!("expected view-source wrapping, got {:?}", other),
    }
    assert!(p.parse(&input).ends_with("view-source:http://example.com"));
}

#[test]
fn test_idempotent_for_canonical_urls() {
    let p = UrlParser::default();
    let urls = [
        "https://example.com/path?q=1#frag",
        "http://example.org/",
        "ftp://files.example.com/pub",
        "about:blank",
        "data:text/plain,hello",
        "chrome://settings",
        "file:///tmp/index.html",
        "app://app/pages/settings/index.html",
    ];

    for url in urls {
        let once = p.parse(url);
        assert_eq!(once, url, "canonical URL was rewritten: {}", url);
        assert_eq!(p.parse(&once), once, "parse is not idempotent for: {}", url);
    }
}

#[test]
fn test_parse_output_is_stable() {
    let p = UrlParser::default();
    for input in ["github.com", "http://github.com", "app:settings", ADDRESS, "rust lifetimes", ""] {
        let once = p.parse(input);
        assert_eq!(p.parse(&once), once, "second parse changed output for {:?}", input);
    }
}

#[test]
fn test_https_upgrade_policy() {
    let p = UrlParser::default();
    assert_eq!(p.parse("http://github.com/rust-lang/rust"), "https://github.com/rust-lang/rust");
    assert_eq!(p.parse("http://www.wikipedia.org"), "https://www.wikipedia.org");
    assert_eq!(p.parse("http://example.org"), "http://example.org");
    assert_eq!(p.parse("docs.rs/serde"), "https://docs.rs/serde");
    assert_eq!(p.parse("example.org/page"), "http://example.org/page");
}

#[test]
fn test_local_hosts_and_ip_literals() {
    let p = UrlParser::default().with_local_hosts(LocalHosts::new(["localhost", "nas"]));
    assert_eq!(p.parse("localhost:3000/api"), "http://localhost:3000/api");
    assert_eq!(p.parse("nas/share"), "http://nas/share");
    assert_eq!(p.parse("10.1.2.3:8080"), "http://10.1.2.3:8080");
    assert_eq!(p.parse("[::1]:8080/"), "http://[::1]:8080/");
    assert_eq!(p.parse("printer"), "https://duckduckgo.com/?q=printer");
}

#[test]
fn test_internationalized_domain() {
    let p = UrlParser::default();
    assert_eq!(p.parse("münchen.de"), "http://münchen.de");
    assert!(p.validate_domain("пример.рф") == p.validate_domain("xn--e1afmkfd.xn--p1ai"));
}

#[test]
fn test_malformed_punycode_goes_to_search() {
    let p = UrlParser::default();
    assert!(!p.validate_domain("xn--ü.com"));
    assert_eq!(p.parse("xn--ü.com"), SearchEngine::duckduckgo().query_url("xn--ü.com"));
    assert_eq!(p.parse("xn--ü.com"), "https://duckduckgo.com/?q=xn--%C3%BC.com");
}

#[test]
fn test_newer_generic_tlds_are_domains() {
    let p = UrlParser::default();
    for domain in ["citibank.bank", "visit.london", "example.berlin", "my.farm", "nic.google"] {
        assert!(p.validate_domain(domain), "{} should be a domain", domain);
        assert_eq!(p.parse(domain), format!("http://{}", domain));
    }
}

#[test]
fn test_fully_qualified_domain() {
    let p = UrlParser::default();
    assert!(p.validate_domain("example.com."));
    assert_eq!(p.parse("example.com."), "http://example.com.");
    assert_eq!(p.parse("example.com./path"), "http://example.com./path");
    assert!(p.parse("example.com..").starts_with("https://duckduckgo.com/"));
}

#[test]
fn test_internal_shorthand_round_trip() {
    let p = UrlParser::default();
    let expanded = p.parse("app:settings?section=privacy");
    assert_eq!(expanded, "app://app/pages/settings/index.html?section=privacy");
    assert_eq!(p.source_url_of(&expanded), "app://settings?section=privacy");
    assert_eq!(p.parse(&p.source_url_of(&expanded)), expanded);
}

#[test]
fn test_represented_source_url_round_trip() {
    let p = UrlParser::default();
    let sources = [
        "https://example.com/",
        "https://example.com/a b?c=d&e=f#g",
        "http://xn--caf-dma.com/menu",
        "file:///home/user/notes.txt",
    ];

    for source in sources {
        let internal = p.represent("reader", source);
        assert!(p.is_internal_url(&internal));
        assert_eq!(p.source_url_of(&internal), source);
    }
}

#[test]
fn test_classification_is_total() {
    let p = UrlParser::default();
    let inputs = ["", " ", "\u{0}", "http://", "app:", "view-source:", "0x", "@", "-", "[", "%s", "日本語"];
    for input in inputs {
        let classified = p.classify(input);
        let rendered = p.render(&classified);
        assert!(!rendered.is_empty(), "empty output for {:?}", input);
        assert_eq!(rendered, p.parse(input));
    }
}
