use std::sync::Arc;
use vitrine_cms::CmsClient;
use vitrine_domain::config::AppConfig;
use vitrine_globals::Globals;
use vitrine_pages::{Pages, Renderer};

#[derive(Debug)]
struct AppStateInner {
    config: AppConfig,
    cms: CmsClient,
    globals: Globals,
    pages: Pages,
    renderer: Renderer,
}

/// Shared application state. Cheap to clone; one instance of every
/// subsystem lives behind the `Arc` for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    pub(crate) fn new(
        config: AppConfig,
        cms: CmsClient,
        globals: Globals,
        pages: Pages,
        renderer: Renderer,
    ) -> Self {
        Self { inner: Arc::new(AppStateInner { config, cms, globals, pages, renderer }) }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn cms(&self) -> &CmsClient {
        &self.inner.cms
    }

    #[must_use]
    pub fn globals(&self) -> &Globals {
        &self.inner.globals
    }

    #[must_use]
    pub fn pages(&self) -> &Pages {
        &self.inner.pages
    }

    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.inner.renderer
    }
}
