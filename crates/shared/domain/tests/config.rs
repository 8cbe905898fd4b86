use vitrine_domain::config::{AppConfig, CacheConfig, CmsConfig, ServerConfig, SiteConfig};
use vitrine_domain::locale::Locale;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 8080);

    let cms = CmsConfig::default();
    assert_eq!(cms.base_url, "http://localhost:1337");
    assert!(cms.token.is_none());
    assert_eq!(cms.timeout().as_secs(), 10);
    assert_eq!(cms.revalidate().as_secs(), 60);

    let site = SiteConfig::default();
    assert_eq!(site.home_slug, "home-page");
    assert_eq!(site.default_locale, Locale::En);

    let cache = CacheConfig::default();
    assert_eq!(cache.fresh().as_secs(), 300);
    assert_eq!(cache.stale().as_secs(), 600);
    assert_eq!(cache.fetch_timeout().as_secs(), 10);
}

#[test]
fn app_config_deserializes() {
    let raw = serde_json::json!({
        "server": { "address": "::", "port": 3000 },
        "cms": { "base_url": "https://cms.example.com", "token": "secret", "revalidate_seconds": 120 },
        "site": { "name": "Example", "home_slug": "home", "default_locale": "fr" },
        "cache": { "fresh_seconds": 60 }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.cms.token.as_deref(), Some("secret"));
    assert_eq!(cfg.cms.revalidate().as_secs(), 120);
    assert_eq!(cfg.site.default_locale, Locale::Fr);
    assert_eq!(cfg.cache.fresh().as_secs(), 60);
    // Unspecified sections keep their defaults.
    assert_eq!(cfg.cache.stale().as_secs(), 600);
}

#[test]
fn app_config_deserializes_from_toml() {
    let raw = r#"
        [server]
        port = 9090

        [cms]
        base_url = "https://cms.internal"
    "#;

    let cfg: AppConfig = toml::from_str(raw).expect("toml config deserialize");
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.cms.base_url, "https://cms.internal");
}
