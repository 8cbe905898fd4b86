use std::time::Duration;
use vitrine_cms::{CmsClient, CmsError, tags};
use vitrine_domain::config::CmsConfig;
use vitrine_domain::locale::Locale;

#[test]
fn builder_requires_a_base_url() {
    let err = CmsClient::builder().init().expect_err("missing base URL must fail");
    assert!(matches!(err, CmsError::Validation { .. }));

    let err = CmsClient::builder().base_url("   ").init().expect_err("blank base URL must fail");
    assert!(matches!(err, CmsError::Validation { .. }));
}

#[test]
fn builder_accepts_full_configuration() {
    let client = CmsClient::builder()
        .base_url("http://localhost:1337/")
        .token("cms-read-token")
        .timeout(Duration::from_secs(5))
        .revalidate(Duration::from_secs(30))
        .init()
        .expect("client should build");

    // Handle clones share the same inner state.
    let _clone = client.clone();
}

#[test]
fn builder_reads_app_config() {
    let cfg = CmsConfig::default();
    let client = CmsClient::builder().config(&cfg).init();
    assert!(client.is_ok());
}

#[test]
fn rejects_tokens_with_invalid_header_characters() {
    let err = CmsClient::builder()
        .base_url("http://localhost:1337")
        .token("bad\ntoken")
        .init()
        .expect_err("newline in token must fail");
    assert!(matches!(err, CmsError::Validation { .. }));
}

#[test]
fn invalidation_tags_are_stable() {
    assert_eq!(tags::page("home-page", Locale::En), "page-home-page-en");
    assert_eq!(tags::page("about", Locale::Pt), "page-about-pt");
    assert_eq!(tags::GLOBAL_SETTINGS, "global-settings");
    assert_eq!(tags::PAGE_SLUGS, "page-slugs");
}

#[tokio::test]
async fn unreachable_backend_surfaces_an_http_error() {
    // Reserved TEST-NET-1 address; connections fail fast without touching a
    // real network service.
    let client = CmsClient::builder()
        .base_url("http://192.0.2.1:9")
        .timeout(Duration::from_millis(250))
        .init()
        .expect("client should build");

    let err = client.page_slugs().await.expect_err("fetch must fail");
    assert!(matches!(err, CmsError::Http { .. }));
}
