use std::borrow::Cow;
use vitrine_cms::CmsError;

/// Errors from a global-settings fetch. These never reach request handlers;
/// the cache logs them and falls back to the last known value.
#[derive(Debug, thiserror::Error)]
pub enum GlobalsError {
    /// The underlying CMS request failed.
    #[error("Settings fetch error{}: {source}", format_context(context))]
    Fetch {
        source: CmsError,
        context: Option<Cow<'static, str>>,
    },

    /// The fetch did not complete within the configured deadline.
    #[error("Settings fetch timed out after {seconds}s{}", format_context(context))]
    Timeout { seconds: u64, context: Option<Cow<'static, str>> },
}

impl From<CmsError> for GlobalsError {
    fn from(source: CmsError) -> Self {
        Self::Fetch { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
