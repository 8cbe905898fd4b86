use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use vitrine_cms::CmsError;
use vitrine_domain::config::CacheConfig;
use vitrine_domain::settings::{FooterLink, GlobalSettings, NavigationItem};
use vitrine_globals::{Globals, SettingsSource};

fn settings(site_name: &str) -> GlobalSettings {
    GlobalSettings {
        id: 1,
        document_id: "global-1".to_owned(),
        site_name: site_name.to_owned(),
        favicon: None,
        navigation: vec![NavigationItem { id: 1, label: "Home".to_owned(), url: "/".to_owned() }],
        footer_links: vec![
            FooterLink {
                id: 1,
                title: Some("Privacy".to_owned()),
                url: Some("/privacy".to_owned()),
                category: Some("Legal".to_owned()),
            },
            FooterLink {
                id: 2,
                title: Some("Terms".to_owned()),
                url: Some("/terms".to_owned()),
                category: Some("Legal".to_owned()),
            },
        ],
        social_links: vec![],
    }
}

/// Counts fetches; failure and latency are switchable per test.
#[derive(Debug, Default)]
struct FakeSource {
    calls: AtomicUsize,
    fail: AtomicBool,
    delay: Option<Duration>,
}

impl FakeSource {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Local wrapper so the foreign `SettingsSource` trait can be implemented
/// for a shared `FakeSource` without tripping the orphan rule.
#[derive(Debug)]
struct SourceHandle(Arc<FakeSource>);

impl SettingsSource for SourceHandle {
    fn fetch_settings(
        &self,
    ) -> impl Future<Output = Result<GlobalSettings, CmsError>> + Send {
        let this = Arc::clone(&self.0);
        async move {
            this.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = this.delay {
                tokio::time::sleep(delay).await;
            }
            if this.fail.load(Ordering::SeqCst) {
                return Err(CmsError::Status { status: 503, context: None });
            }
            Ok(settings("Vitrine"))
        }
    }
}

fn cache_config() -> CacheConfig {
    // Defaults: 5 min fresh, 10 min stale, 10 s fetch timeout.
    CacheConfig::default()
}

#[tokio::test(start_paused = true)]
async fn fresh_window_issues_at_most_one_fetch() {
    let source = Arc::new(FakeSource::default());
    let globals = Globals::new(SourceHandle(Arc::clone(&source)), &cache_config());

    let first = globals.get().await.expect("first read");
    let second = globals.get().await.expect("second read");

    assert_eq!(source.calls(), 1, "second read within the fresh window must not fetch");
    assert!(Arc::ptr_eq(&first, &second), "both reads share the cached value");
}

#[tokio::test(start_paused = true)]
async fn concurrent_cold_readers_share_one_fetch() {
    let source = Arc::new(FakeSource { delay: Some(Duration::from_millis(50)), ..FakeSource::default() });
    let globals = Globals::new(SourceHandle(Arc::clone(&source)), &cache_config());

    let (a, b) = tokio::join!(globals.get(), globals.get());

    assert_eq!(source.calls(), 1, "single-flight: two cold readers, one network call");
    let (a, b) = (a.expect("reader a"), b.expect("reader b"));
    assert!(Arc::ptr_eq(&a, &b), "both readers observe the winner's value");
}

#[tokio::test(start_paused = true)]
async fn stale_reads_return_immediately_and_revalidate_in_background() {
    let source = Arc::new(FakeSource::default());
    let globals = Globals::new(SourceHandle(Arc::clone(&source)), &cache_config());

    let first = globals.get().await.expect("warm-up read");
    assert_eq!(source.calls(), 1);

    // Into the stale window: 5 min < age < 10 min.
    tokio::time::advance(Duration::from_secs(6 * 60)).await;

    let stale = globals.get().await.expect("stale read");
    assert!(Arc::ptr_eq(&first, &stale), "stale read returns the old value without waiting");

    // Let the detached refresh run.
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(source.calls(), 2, "stale read triggers exactly one background refresh");

    let refreshed = globals.get().await.expect("post-refresh read");
    assert!(!Arc::ptr_eq(&first, &refreshed), "background refresh replaced the value");
    assert_eq!(source.calls(), 2, "post-refresh read is served fresh");
}

#[tokio::test(start_paused = true)]
async fn failure_without_prior_cache_yields_none() {
    let source = Arc::new(FakeSource::default());
    source.fail.store(true, Ordering::SeqCst);
    let globals = Globals::new(SourceHandle(Arc::clone(&source)), &cache_config());

    assert!(globals.get().await.is_none());
    assert_eq!(source.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn failure_with_prior_cache_falls_back_to_last_value() {
    let source = Arc::new(FakeSource::default());
    let globals = Globals::new(SourceHandle(Arc::clone(&source)), &cache_config());

    let first = globals.get().await.expect("warm-up read");

    // Expire the cache entirely, then break the backend.
    tokio::time::advance(Duration::from_secs(11 * 60)).await;
    source.fail.store(true, Ordering::SeqCst);

    let fallback = globals.get().await.expect("fallback read");
    assert!(Arc::ptr_eq(&first, &fallback), "failed revalidation serves the last known value");
    assert_eq!(source.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn slow_fetch_times_out_and_falls_back() {
    let source = Arc::new(FakeSource { delay: Some(Duration::from_secs(30)), ..FakeSource::default() });
    let globals = Globals::new(SourceHandle(Arc::clone(&source)), &cache_config());

    // Fetch timeout is 10 s; a 30 s backend must not hang the caller.
    assert!(globals.get().await.is_none());
    assert_eq!(source.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn refresh_clears_and_refetches() {
    let source = Arc::new(FakeSource::default());
    let globals = Globals::new(SourceHandle(Arc::clone(&source)), &cache_config());

    globals.get().await.expect("warm-up read");
    assert_eq!(source.calls(), 1);

    let refreshed = globals.refresh().await.expect("refresh");
    assert_eq!(source.calls(), 2, "refresh bypasses the fresh window");
    assert_eq!(refreshed.site_name, "Vitrine");
}

#[tokio::test(start_paused = true)]
async fn accessors_return_empty_collections_when_unavailable() {
    let source = Arc::new(FakeSource::default());
    source.fail.store(true, Ordering::SeqCst);
    let globals = Globals::new(SourceHandle(Arc::clone(&source)), &cache_config());

    assert!(globals.navigation().await.is_empty());
    assert!(globals.footer_groups().await.is_empty());
    assert!(globals.social_links().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn accessors_expose_settings_fields() {
    let source = Arc::new(FakeSource::default());
    let globals = Globals::new(SourceHandle(Arc::clone(&source)), &cache_config());

    let nav = globals.navigation().await;
    assert_eq!(nav.len(), 1);
    assert_eq!(nav[0].label, "Home");

    let groups = globals.footer_groups().await;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].category, "Legal");
    assert_eq!(groups[0].links.len(), 2);

    assert_eq!(source.calls(), 1, "accessors share the cached value");
}
