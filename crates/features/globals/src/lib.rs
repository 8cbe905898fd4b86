//! Global site settings feature slice.
//!
//! Holds the one process-wide [`GlobalSettings`] value (navigation, footer,
//! social links) behind a stale-while-revalidate cache:
//!
//! * **Fresh**: served straight from memory, no network.
//! * **Stale**: served from memory while one detached task revalidates.
//! * **Expired / empty**: callers serialize on a single-flight fetch; the
//!   winner talks to the CMS, everyone else reads its stored result.
//!
//! Fetch failures are logged and absorbed: readers get the last complete
//! value, or `None` if there never was one. A torn value is impossible since
//! the cache slot swaps whole `Arc`s.

mod error;

pub use error::GlobalsError;

use parking_lot::RwLock;
use std::future::Future;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};
use vitrine_cms::{CmsClient, CmsError};
use vitrine_domain::config::CacheConfig;
use vitrine_domain::settings::{FooterGroup, GlobalSettings, NavigationItem, SocialLink};

/// The seam between the cache and the network. Implemented by [`CmsClient`];
/// tests substitute their own source.
pub trait SettingsSource: Send + Sync + 'static {
    fn fetch_settings(&self)
    -> impl Future<Output = Result<GlobalSettings, CmsError>> + Send;
}

impl SettingsSource for CmsClient {
    fn fetch_settings(
        &self,
    ) -> impl Future<Output = Result<GlobalSettings, CmsError>> + Send {
        self.global_settings()
    }
}

#[derive(Debug, Default)]
struct CacheSlot {
    value: Option<Arc<GlobalSettings>>,
    fetched_at: Option<Instant>,
}

#[derive(Debug)]
struct GlobalsInner<S> {
    source: S,
    cfg: CacheConfig,
    slot: RwLock<CacheSlot>,
    // Single-flight guard: whoever holds this performs the one network fetch.
    fetch_lock: Arc<tokio::sync::Mutex<()>>,
}

/// Handle to the global-settings cache. Cheap to clone; all clones share one
/// cache slot and one in-flight fetch.
#[derive(Debug)]
pub struct Globals<S = CmsClient> {
    inner: Arc<GlobalsInner<S>>,
}

impl<S> Clone for Globals<S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

enum Tier {
    Fresh(Arc<GlobalSettings>),
    Stale(Arc<GlobalSettings>),
    Expired,
}

impl<S: SettingsSource> Globals<S> {
    pub fn new(source: S, cfg: &CacheConfig) -> Self {
        Self {
            inner: Arc::new(GlobalsInner {
                source,
                cfg: cfg.clone(),
                slot: RwLock::new(CacheSlot::default()),
                fetch_lock: Arc::new(tokio::sync::Mutex::new(())),
            }),
        }
    }

    /// Returns the current global settings, or `None` when nothing has ever
    /// been fetched successfully and the CMS is unreachable.
    ///
    /// Never blocks on the network while a usable value exists: fresh values
    /// return immediately, stale values return immediately and revalidate in
    /// the background.
    pub async fn get(&self) -> Option<Arc<GlobalSettings>> {
        match self.classify() {
            Tier::Fresh(value) => Some(value),
            Tier::Stale(value) => {
                self.spawn_refresh();
                Some(value)
            },
            Tier::Expired => self.fetch_single_flight().await,
        }
    }

    /// Clears the cache and fetches anew. For operator-triggered refreshes
    /// after publishing in the CMS.
    pub async fn refresh(&self) -> Option<Arc<GlobalSettings>> {
        debug!("Clearing global settings cache");
        {
            let mut slot = self.inner.slot.write();
            slot.value = None;
            slot.fetched_at = None;
        }
        self.get().await
    }

    /// Warms the cache; useful at startup so the first request doesn't pay
    /// the fetch.
    pub async fn preload(&self) {
        if self.get().await.is_some() {
            info!("Global settings preloaded");
        }
    }

    /// Navigation entries, or empty when settings are unavailable.
    pub async fn navigation(&self) -> Vec<NavigationItem> {
        self.get().await.map(|s| s.navigation.clone()).unwrap_or_default()
    }

    /// Footer links grouped by category, or empty when settings are unavailable.
    pub async fn footer_groups(&self) -> Vec<FooterGroup> {
        self.get().await.map(|s| s.footer_groups()).unwrap_or_default()
    }

    /// Social links, or empty when settings are unavailable.
    pub async fn social_links(&self) -> Vec<SocialLink> {
        self.get().await.map(|s| s.social_links.clone()).unwrap_or_default()
    }

    fn classify(&self) -> Tier {
        let slot = self.inner.slot.read();
        let (Some(value), Some(fetched_at)) = (&slot.value, slot.fetched_at) else {
            return Tier::Expired;
        };

        let age = fetched_at.elapsed();
        if age < self.inner.cfg.fresh() {
            Tier::Fresh(Arc::clone(value))
        } else if age < self.inner.cfg.stale() {
            Tier::Stale(Arc::clone(value))
        } else {
            Tier::Expired
        }
    }

    /// Detaches one background revalidation. If a fetch is already running,
    /// this is a no-op; its result will land in the slot anyway.
    fn spawn_refresh(&self) {
        let Ok(guard) = Arc::clone(&self.inner.fetch_lock).try_lock_owned() else {
            trace!("Settings fetch already in flight, skipping background refresh");
            return;
        };
        let this = self.clone();
        tokio::spawn(async move {
            let _guard = guard;
            if let Err(e) = this.fetch_and_store().await {
                warn!("Background settings refresh failed: {e}");
            }
        });
    }

    async fn fetch_single_flight(&self) -> Option<Arc<GlobalSettings>> {
        let guard = Arc::clone(&self.inner.fetch_lock).lock_owned().await;

        // A winner may have refilled the slot while we waited on the lock;
        // in that case its result is ours and no second call goes out.
        if let Tier::Fresh(value) = self.classify() {
            return Some(value);
        }

        // The fetch runs detached: once started it always completes and
        // publishes into the slot, even if this caller's request is dropped
        // mid-flight.
        let this = self.clone();
        let task = tokio::spawn(async move {
            let _guard = guard;
            this.fetch_and_store().await
        });

        let result = match task.await {
            Ok(result) => result,
            Err(e) => {
                warn!("Settings fetch task failed: {e}");
                return self.last_value();
            },
        };

        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Settings fetch failed: {e}");
                self.last_value()
            },
        }
    }

    fn last_value(&self) -> Option<Arc<GlobalSettings>> {
        let slot = self.inner.slot.read();
        if slot.value.is_some() {
            debug!("Serving last known global settings after fetch failure");
        }
        slot.value.clone()
    }

    /// Performs the network fetch and publishes the result. Must only run
    /// while holding `fetch_lock`. The fetch always completes and updates the
    /// slot, even if the caller that started it has gone away.
    async fn fetch_and_store(&self) -> Result<Arc<GlobalSettings>, GlobalsError> {
        let started = Instant::now();
        debug!("Fetching global settings");

        let timeout = self.inner.cfg.fetch_timeout();
        let settings = tokio::time::timeout(timeout, self.inner.source.fetch_settings())
            .await
            .map_err(|_| GlobalsError::Timeout {
                seconds: timeout.as_secs(),
                context: None,
            })??;

        let value = Arc::new(settings);
        {
            let mut slot = self.inner.slot.write();
            slot.value = Some(Arc::clone(&value));
            slot.fetched_at = Some(Instant::now());
        }

        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "Global settings fetched");
        Ok(value)
    }
}
