use std::borrow::Cow;

/// A specialized error enum for CMS API access.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("CMS request error{}: {source}", format_context(context))]
    Http {
        source: reqwest::Error,
        context: Option<Cow<'static, str>>,
    },

    /// The CMS answered with a non-success status.
    #[error("CMS responded with status {status}{}", format_context(context))]
    Status { status: u16, context: Option<Cow<'static, str>> },

    /// The response body did not match the expected envelope shape.
    #[error("CMS decode error{}: {source}", format_context(context))]
    Decode {
        source: serde_json::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Invalid client configuration.
    #[error("CMS client validation error{}: {message}", format_context(context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl CmsError {
    fn set_context(&mut self, ctx: Cow<'static, str>) {
        match self {
            Self::Http { context, .. }
            | Self::Status { context, .. }
            | Self::Decode { context, .. }
            | Self::Validation { context, .. } => *context = Some(ctx),
        }
    }
}

impl From<reqwest::Error> for CmsError {
    fn from(source: reqwest::Error) -> Self {
        Self::Http { source, context: None }
    }
}

impl From<serde_json::Error> for CmsError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source, context: None }
    }
}

/// Attaches a static context string to any error convertible into [`CmsError`].
pub trait CmsErrorExt<T> {
    /// Maps the error into [`CmsError`] and records `context`.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CmsError>;
}

impl<T, E: Into<CmsError>> CmsErrorExt<T> for Result<T, E> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CmsError> {
        self.map_err(|e| {
            let mut err = e.into();
            err.set_context(context.into());
            err
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
