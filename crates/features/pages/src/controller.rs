use crate::chrome::PageMeta;
use tracing::{error, instrument};
use vitrine_cms::CmsClient;
use vitrine_domain::locale::Locale;
use vitrine_domain::page::Page;

/// Page controller: every CMS failure is logged here and converted into
/// `None`/empty so handlers always have a value of the expected shape. A
/// broken backend renders a not-found page, it never 500s.
#[derive(Debug, Clone)]
pub struct Pages {
    cms: CmsClient,
    home_slug: String,
}

impl Pages {
    pub fn new(cms: CmsClient, home_slug: impl Into<String>) -> Self {
        Self { cms, home_slug: home_slug.into() }
    }

    #[must_use]
    pub fn home_slug(&self) -> &str {
        &self.home_slug
    }

    /// The page document behind `/`.
    pub async fn home(&self, locale: Locale) -> Option<Page> {
        self.by_slug(&self.home_slug, locale).await
    }

    /// One page by slug, or `None` when it does not exist or the CMS is
    /// unreachable.
    #[instrument(skip(self))]
    pub async fn by_slug(&self, slug: &str, locale: Locale) -> Option<Page> {
        match self.cms.page_by_slug(slug, locale).await {
            Ok(page) => page,
            Err(e) => {
                error!("Error fetching page {slug}: {e}");
                None
            },
        }
    }

    /// Metadata for a slug, with home/not-found fallbacks.
    pub async fn metadata(&self, slug: &str, locale: Locale) -> PageMeta {
        let page = self.by_slug(slug, locale).await;
        PageMeta::derive(page.as_ref(), slug, &self.home_slug)
    }

    /// Page and metadata in one call; the CMS response cache makes the
    /// second lookup free.
    pub async fn with_metadata(&self, slug: &str, locale: Locale) -> (Option<Page>, PageMeta) {
        let page = self.by_slug(slug, locale).await;
        let meta = PageMeta::derive(page.as_ref(), slug, &self.home_slug);
        (page, meta)
    }

    /// Slugs of every published page, or empty on failure (the sitemap just
    /// comes out shorter).
    pub async fn slugs(&self) -> Vec<String> {
        match self.cms.page_slugs().await {
            Ok(slugs) => slugs,
            Err(e) => {
                error!("Error fetching page slugs: {e}");
                Vec::new()
            },
        }
    }

    /// Whether a published page exists for the slug.
    pub async fn exists(&self, slug: &str, locale: Locale) -> bool {
        self.by_slug(slug, locale).await.is_some()
    }
}
