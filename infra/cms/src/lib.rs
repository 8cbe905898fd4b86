//! # CMS Infrastructure
//!
//! This crate provides the read-only HTTP client for the headless CMS backend.
//!
//! ## Key Features
//! - **Builder Pattern**: Fluent API for configuring the base URL, auth token,
//!   and request timeout.
//! - **Tagged Response Cache**: Every endpoint response is cached under its
//!   invalidation tag with a revalidation TTL, so repeated page renders within
//!   the window never hit the network.
//! - **Read-only**: The client issues `GET` requests only; the site never
//!   writes back to the CMS.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vitrine_cms::{CmsClient, CmsError};
//! use vitrine_domain::locale::Locale;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), CmsError> {
//!     let cms = CmsClient::builder()
//!         .base_url("http://localhost:1337")
//!         .init()?;
//!
//!     let page = cms.page_by_slug("home-page", Locale::En).await?;
//!     println!("found: {}", page.is_some());
//!     Ok(())
//! }
//! ```

mod error;
pub mod tags;

pub use error::{CmsError, CmsErrorExt};

use moka::future::Cache;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, trace};
use vitrine_domain::config::CmsConfig;
use vitrine_domain::locale::Locale;
use vitrine_domain::page::{CmsResponse, Page};
use vitrine_domain::settings::GlobalSettings;

/// Upper bound on cached endpoint responses. One entry per tag; pages
/// dominate, so this is slugs x locales with room to spare.
const MAX_CACHE_CAPACITY: u64 = 4_096;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REVALIDATE: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct CmsClientInner {
    http: reqwest::Client,
    base_url: String,
    cache: Cache<String, Arc<Value>>,
}

/// CMS API client handle. Cheap to clone; all clones share one HTTP pool and
/// one response cache.
#[derive(Debug, Clone)]
pub struct CmsClient {
    inner: Arc<CmsClientInner>,
}

impl CmsClient {
    /// Creates a new [`CmsClientBuilder`].
    pub fn builder() -> CmsClientBuilder {
        CmsClientBuilder::new()
    }

    /// Fetches one page by slug and locale, with nested section population.
    ///
    /// Returns `Ok(None)` when the CMS has no published document for the
    /// slug/locale pair.
    ///
    /// # Errors
    /// Returns [`CmsError`] on transport failures, non-success statuses, or
    /// an unexpected response shape.
    #[instrument(skip(self))]
    pub async fn page_by_slug(
        &self,
        slug: &str,
        locale: Locale,
    ) -> Result<Option<Page>, CmsError> {
        let url = format!(
            "{}/api/pages?filters[slug]={}&locale={}&customPopulate=nested",
            self.inner.base_url,
            urlencoding::encode(slug),
            locale.as_str(),
        );

        let body = self.get_cached(&tags::page(slug, locale), url).await?;
        let response: CmsResponse<Vec<Page>> = serde_json::from_value((*body).clone())
            .context("Unexpected page envelope")?;

        Ok(response.data.into_iter().next())
    }

    /// Fetches the site-wide settings document with full population.
    ///
    /// # Errors
    /// Returns [`CmsError`] on transport failures, non-success statuses, or
    /// an unexpected response shape.
    #[instrument(skip(self))]
    pub async fn global_settings(&self) -> Result<GlobalSettings, CmsError> {
        let url = format!("{}/api/global?populate=*", self.inner.base_url);

        let body = self.get_cached(tags::GLOBAL_SETTINGS, url).await?;
        let response: CmsResponse<GlobalSettings> = serde_json::from_value((*body).clone())
            .context("Unexpected global settings envelope")?;

        Ok(response.data)
    }

    /// Fetches the slugs of every published page (used for the sitemap).
    ///
    /// # Errors
    /// Returns [`CmsError`] on transport failures, non-success statuses, or
    /// an unexpected response shape.
    #[instrument(skip(self))]
    pub async fn page_slugs(&self) -> Result<Vec<String>, CmsError> {
        let url = format!("{}/api/pages?fields[0]=slug", self.inner.base_url);

        let body = self.get_cached(tags::PAGE_SLUGS, url).await?;
        let response: CmsResponse<Vec<SlugRow>> = serde_json::from_value((*body).clone())
            .context("Unexpected slug list envelope")?;

        Ok(response.data.into_iter().map(|row| row.slug).collect())
    }

    /// Evicts one cached response by its invalidation tag. The next call for
    /// that tag revalidates against the CMS.
    pub async fn invalidate(&self, tag: &str) {
        debug!(tag, "Invalidating cached CMS response");
        self.inner.cache.invalidate(tag).await;
    }

    /// Drops every cached response.
    pub fn invalidate_all(&self) {
        debug!("Invalidating all cached CMS responses");
        self.inner.cache.invalidate_all();
    }

    async fn get_cached(&self, tag: &str, url: String) -> Result<Arc<Value>, CmsError> {
        if let Some(cached) = self.inner.cache.get(tag).await {
            trace!(tag, "CMS response served from cache");
            return Ok(cached);
        }

        let body = Arc::new(self.fetch(&url).await?);
        self.inner.cache.insert(tag.to_owned(), Arc::clone(&body)).await;
        Ok(body)
    }

    async fn fetch(&self, url: &str) -> Result<Value, CmsError> {
        debug!(url, "Fetching from CMS");

        let response = self.inner.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status { status: status.as_u16(), context: None });
        }

        Ok(response.json::<Value>().await.context("Reading CMS response body")?)
    }
}

#[derive(Debug, Deserialize)]
struct SlugRow {
    slug: String,
}

/// A fluent builder for configuring a [`CmsClient`].
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct CmsClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
    revalidate: Option<Duration>,
}

impl CmsClientBuilder {
    /// Creates a new [`CmsClientBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CMS base URL (scheme + host, without the `/api` suffix).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets a bearer token sent with every request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the per-request timeout.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets how long cached responses stay valid before revalidation.
    pub const fn revalidate(mut self, revalidate: Duration) -> Self {
        self.revalidate = Some(revalidate);
        self
    }

    /// Applies every field of an application [`CmsConfig`] at once.
    pub fn config(mut self, cfg: &CmsConfig) -> Self {
        self.base_url = Some(cfg.base_url.clone());
        self.token.clone_from(&cfg.token);
        self.timeout = Some(cfg.timeout());
        self.revalidate = Some(cfg.revalidate());
        self
    }

    /// Consumes the builder and constructs the client.
    ///
    /// # Errors
    /// * [`CmsError::Validation`] if the base URL is missing or empty.
    /// * [`CmsError::Http`] if the underlying HTTP client cannot be built.
    pub fn init(self) -> Result<CmsClient, CmsError> {
        let base_url = match self.base_url {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_owned(),
            _ => {
                return Err(CmsError::Validation {
                    message: "CMS base URL is required".into(),
                    context: None,
                });
            },
        };

        let mut http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(token) = &self.token {
            let mut headers = reqwest::header::HeaderMap::new();
            let mut value = reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| CmsError::Validation {
                    message: "CMS token contains invalid header characters".into(),
                    context: None,
                })?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
            http = http.default_headers(headers);
        }

        let http = http.build().context("Building the CMS HTTP client")?;

        let cache = Cache::builder()
            .max_capacity(MAX_CACHE_CAPACITY)
            .time_to_live(self.revalidate.unwrap_or(DEFAULT_REVALIDATE))
            .build();

        Ok(CmsClient { inner: Arc::new(CmsClientInner { http, base_url, cache }) })
    }
}
