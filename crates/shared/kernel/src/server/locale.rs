use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use std::convert::Infallible;
use vitrine_domain::locale::Locale;

const LOCALE_COOKIE: &str = "locale";

/// Per-request locale, negotiated once at extraction time.
///
/// Order: `locale` cookie, then the primary `Accept-Language` entry, then the
/// site default. Extraction is infallible; an unreadable header simply falls
/// through to the next source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar.get(LOCALE_COOKIE).map(|c| c.value().to_owned());

        let accept_language = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());

        Ok(Self(Locale::resolve(cookie.as_deref(), accept_language, Locale::default())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(cookie: Option<&str>, accept: Option<&str>) -> Locale {
        let mut builder = Request::builder().uri("/");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, format!("locale={cookie}"));
        }
        if let Some(accept) = accept {
            builder = builder.header(header::ACCEPT_LANGUAGE, accept);
        }
        let (mut parts, ()) = builder.body(()).expect("request").into_parts();

        let RequestLocale(locale) = RequestLocale::from_request_parts(&mut parts, &())
            .await
            .expect("infallible");
        locale
    }

    #[tokio::test]
    async fn cookie_beats_header() {
        assert_eq!(extract(Some("fr"), Some("pt-BR")).await, Locale::Fr);
    }

    #[tokio::test]
    async fn header_prefix_without_cookie() {
        assert_eq!(extract(None, Some("pt-BR,pt;q=0.9")).await, Locale::Pt);
    }

    #[tokio::test]
    async fn unsupported_everything_defaults_to_en() {
        assert_eq!(extract(None, Some("de-DE,de;q=0.9")).await, Locale::En);
        assert_eq!(extract(None, None).await, Locale::En);
    }
}
