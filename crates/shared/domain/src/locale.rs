use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Locales the CMS publishes content for.
///
/// The set is closed on purpose: anything the CMS does not know about must
/// collapse to a supported code before it reaches an API query string.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Pt,
}

impl Locale {
    pub const SUPPORTED: [Self; 3] = [Self::En, Self::Fr, Self::Pt];

    /// Parses an exact supported code (`"en"`, `"fr"`, `"pt"`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    /// Resolves the request locale: cookie first, then the primary
    /// `Accept-Language` entry's language prefix, then the default.
    ///
    /// `pt-BR` resolves to `pt`; unsupported values fall through to `default`.
    #[must_use]
    pub fn resolve(cookie: Option<&str>, accept_language: Option<&str>, default: Self) -> Self {
        if let Some(code) = cookie
            && let Some(locale) = Self::from_code(code.trim())
        {
            return locale;
        }

        if let Some(accept) = accept_language
            && let Some(locale) = Self::from_accept_language(accept)
        {
            return locale;
        }

        default
    }

    /// Language prefix of the first `Accept-Language` entry, if supported.
    #[must_use]
    pub fn from_accept_language(accept: &str) -> Option<Self> {
        let primary = accept.split(',').next()?;
        let language = primary.split(';').next()?.split('-').next()?.trim();
        Self::from_code(&language.to_ascii_lowercase())
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Pt => "pt",
        }
    }
}
