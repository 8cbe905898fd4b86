use crate::locale::Locale;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

/// Top-level application configuration shared across subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub server: ServerConfig,
    pub cms: CmsConfig,
    pub site: SiteConfig,
    pub cache: CacheConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

/// Connection settings for the headless CMS backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    /// Base URL of the CMS REST API, without the `/api` suffix.
    pub base_url: String,
    /// Optional bearer token for restricted content.
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// How long a cached CMS response stays valid before revalidation.
    pub revalidate_seconds: u64,
}

impl CmsConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    #[must_use]
    pub const fn revalidate(&self) -> Duration {
        Duration::from_secs(self.revalidate_seconds)
    }
}

/// Site-level settings that do not come from the CMS.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Fallback site name when global settings are unavailable.
    pub name: String,
    /// Slug of the document served at `/`.
    pub home_slug: String,
    /// Public base URL, used for absolute links in the sitemap.
    pub base_url: String,
    pub default_locale: Locale,
}

/// Timing knobs for the global-settings cache.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Values younger than this are served without any revalidation.
    pub fresh_seconds: u64,
    /// Values younger than this (but no longer fresh) are served while a
    /// background refresh runs.
    pub stale_seconds: u64,
    /// Upper bound on a single settings fetch.
    pub fetch_timeout_seconds: u64,
}

impl CacheConfig {
    #[must_use]
    pub const fn fresh(&self) -> Duration {
        Duration::from_secs(self.fresh_seconds)
    }

    #[must_use]
    pub const fn stale(&self) -> Duration {
        Duration::from_secs(self.stale_seconds)
    }

    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 8080 }
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1337".to_owned(),
            token: None,
            timeout_seconds: 10,
            revalidate_seconds: 60,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Vitrine".to_owned(),
            home_slug: "home-page".to_owned(),
            base_url: "http://localhost:8080".to_owned(),
            default_locale: Locale::En,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { fresh_seconds: 5 * 60, stale_seconds: 10 * 60, fetch_timeout_seconds: 10 }
    }
}
