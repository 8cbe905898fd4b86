use serde::Serialize;
use vitrine_domain::page::Page;
use vitrine_domain::settings::{FooterGroup, GlobalSettings, NavigationItem, SocialLink};

/// Shared page chrome: everything around the sections that comes from the
/// global settings. Built per render from whatever the globals cache has;
/// empty chrome still renders a complete document.
#[derive(Debug, Clone, Serialize)]
pub struct SiteChrome {
    pub site_name: String,
    pub favicon_url: Option<String>,
    pub navigation: Vec<NavigationItem>,
    pub footer_groups: Vec<FooterGroup>,
    pub social_links: Vec<SocialLink>,
}

impl SiteChrome {
    /// Builds chrome from cached settings; `fallback_name` covers the case
    /// where the settings have never been fetched.
    #[must_use]
    pub fn from_settings(settings: Option<&GlobalSettings>, fallback_name: &str) -> Self {
        match settings {
            Some(settings) => Self {
                site_name: settings.site_name.clone(),
                favicon_url: settings.favicon.as_ref().map(|f| f.url.clone()),
                navigation: settings.navigation.clone(),
                footer_groups: settings.footer_groups(),
                social_links: settings.social_links.clone(),
            },
            None => Self {
                site_name: fallback_name.to_owned(),
                favicon_url: None,
                navigation: Vec::new(),
                footer_groups: Vec::new(),
                social_links: Vec::new(),
            },
        }
    }
}

/// Document title and description for the `<head>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    /// Derives metadata the way the CMS authors expect: explicit meta fields
    /// win, page fields fill in, and missing pages get a fixed fallback.
    #[must_use]
    pub fn derive(page: Option<&Page>, slug: &str, home_slug: &str) -> Self {
        match page {
            Some(page) => Self {
                title: page.meta_title.clone().unwrap_or_else(|| page.title.clone()),
                description: page
                    .meta_description
                    .clone()
                    .or_else(|| page.description.clone())
                    .unwrap_or_default(),
            },
            None if slug == home_slug => Self {
                title: "Home".to_owned(),
                description: "Welcome to our website".to_owned(),
            },
            None => Self {
                title: "Page Not Found".to_owned(),
                description: "The requested page could not be found.".to_owned(),
            },
        }
    }
}
