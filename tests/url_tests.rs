//! Tests for domain validation and suffix matching.

use std::sync::Arc;

use navurl::knowledge::{LabelBoundaryMatcher, PlainSuffixMatcher, PublicSuffixListMatcher};
use navurl::*;

#[test]
fn test_accepted_domains_reject_appended_invalid_character() {
    let p = UrlParser::default();
    let domains = [
        "example.com",
        "sub.example.co.uk",
        "my-site.io",
        "localhost",
        "127.0.0.1",
        "user@github.com",
        "xn--bcher-kva.de",
    ];

    for domain in domains {
        assert!(p.validate_domain(domain), "should accept {}", domain);
        let broken = format!("{}$invalid", domain);
        assert!(!p.validate_domain(&broken), "should reject {}", broken);
    }
}

#[test]
fn test_rejected_domains() {
    let p = UrlParser::default();
    for domain in ["", "-example.com", "example", "exa mple.com", "example.com..", "a", "example.notatld"] {
        assert!(!p.validate_domain(domain), "should reject {:?}", domain);
    }
    assert!(!p.validate_domain(&format!("{}.com", "a".repeat(300))));
}

#[test]
fn test_plain_suffix_matching_keeps_historical_false_positive() {
    let suffixes = Arc::new(SuffixSet::new(["om"]));
    let hosts = LocalHosts::empty();

    let plain = PlainSuffixMatcher::new(suffixes.clone());
    assert!(validate_domain("example.com", &hosts, &plain));
    assert!(validate_domain("custom", &hosts, &plain));

    let boundary = LabelBoundaryMatcher::new(suffixes);
    assert!(!validate_domain("example.com", &hosts, &boundary));
    assert!(!validate_domain("custom", &hosts, &boundary));
}

#[test]
fn test_default_parser_uses_plain_matching() {
    let kb = KnowledgeBase::new(SuffixSet::new(["om"]), HttpsUpgradeSet::default());
    let plain = UrlParser::new(kb.clone());
    let boundary = UrlParser::new(kb).with_suffix_mode(SuffixMatchMode::LabelBoundary);

    assert_eq!(plain.parse("custom"), "http://custom");
    assert_eq!(boundary.parse("custom"), "https://duckduckgo.com/?q=custom");
}

#[test]
fn test_public_suffix_list_mode() {
    let p = UrlParser::default().with_suffix_mode(SuffixMatchMode::PublicSuffixList);
    assert!(p.validate_domain("example.com"));
    assert!(p.validate_domain("foo.github.io"));
    assert!(!p.validate_domain("example.notatld"));

    let matcher: Arc<dyn SuffixMatcher> = Arc::new(PublicSuffixListMatcher);
    let custom = UrlParser::default().with_suffix_matcher(matcher);
    assert!(custom.validate_domain("example.org"));
}

#[test]
fn test_classification_variants() {
    let p = UrlParser::default();

    assert_eq!(p.classify("   "), ClassifiedUrl::Blank);
    assert_eq!(
        p.classify("https://example.com"),
        ClassifiedUrl::FullUrl("https://example.com".to_string())
    );
    assert_eq!(
        p.classify("example.com"),
        ClassifiedUrl::SchemeMissingDomain("example.com".to_string())
    );
    assert_eq!(
        p.classify("app:history"),
        ClassifiedUrl::InternalVirtualUrl(VirtualPage::new("history"))
    );
    assert_eq!(
        p.classify("hello world"),
        ClassifiedUrl::FreeTextQuery("hello world".to_string())
    );
    assert_eq!(
        p.classify("view-source:app:history"),
        ClassifiedUrl::ViewSourceWrapped {
            depth: 1,
            inner: Box::new(ClassifiedUrl::InternalVirtualUrl(VirtualPage::new("history"))),
        }
    );
}

#[test]
fn test_config_driven_parser() {
    let config = ParserConfig::from_toml_str(
        r#"
internal_scheme = "min"
special_address_scheme = "polygon"
local_hosts = ["localhost", "wiki"]

[search_engine]
name = "Bing"
search_url = "https://www.bing.com/search?q=%s"
"#,
    )
    .unwrap();
    let p = UrlParser::from_config(&config).unwrap();

    assert_eq!(p.parse("min:settings"), "min://app/pages/settings/index.html");
    assert_eq!(p.parse("app:settings"), "https://www.bing.com/search?q=app%3Asettings");
    assert_eq!(p.parse("wiki/Main_Page"), "http://wiki/Main_Page");
    assert_eq!(
        p.parse("0x0000000000000000000000000000000000000000"),
        "polygon://0x0000000000000000000000000000000000000000"
    );
}
