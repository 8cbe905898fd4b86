//! Invalidation tags for cached CMS responses.
//!
//! Each outbound endpoint caches its response under exactly one tag; evicting
//! the tag forces revalidation on the next read.

use vitrine_domain::locale::Locale;

pub const GLOBAL_SETTINGS: &str = "global-settings";
pub const PAGE_SLUGS: &str = "page-slugs";

/// Tag for one page document in one locale.
#[must_use]
pub fn page(slug: &str, locale: Locale) -> String {
    format!("page-{slug}-{locale}")
}
