use std::borrow::Cow;

/// A specialized error enum for the pages slice.
#[derive(Debug, thiserror::Error)]
pub enum PagesError {
    /// Template compilation or rendering failure.
    #[error("Template error{}: {source}", format_context(context))]
    Template {
        source: tera::Error,
        context: Option<Cow<'static, str>>,
    },
}

impl From<tera::Error> for PagesError {
    fn from(source: tera::Error) -> Self {
        Self::Template { source, context: None }
    }
}

/// Attaches a static context string to any error convertible into [`PagesError`].
pub trait PagesErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PagesError>;
}

impl<T, E: Into<PagesError>> PagesErrorExt<T> for Result<T, E> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PagesError> {
        self.map_err(|e| {
            let PagesError::Template { source, .. } = e.into();
            PagesError::Template { source, context: Some(context.into()) }
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
