use crate::state::AppState;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::error;
use vitrine_domain::locale::Locale;
use vitrine_kernel::server::{RequestLocale, system_router};
use vitrine_pages::SiteChrome;

#[allow(unreachable_pub)]
pub fn init(state: AppState) -> Router {
    Router::new()
        .merge(system_router())
        .route("/", get(home_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/{slug}", get(page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home_handler(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
) -> Response {
    let slug = state.pages().home_slug().to_owned();
    render_document(&state, &slug, locale).await
}

async fn page_handler(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    Path(slug): Path<String>,
) -> Response {
    render_document(&state, &slug, locale).await
}

async fn sitemap_handler(State(state): State<AppState>) -> Response {
    let slugs = state.pages().slugs().await;
    let base_url = &state.config().site.base_url;

    match state.renderer().render_sitemap(base_url, state.pages().home_slug(), &slugs) {
        Ok(xml) => ([(header::CONTENT_TYPE, "application/xml")], xml).into_response(),
        Err(e) => {
            error!("Error rendering sitemap: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}

/// Fetches the page and the shared chrome concurrently and renders one of
/// the two documents: the page itself, or the styled not-found fallback.
/// Only a template failure produces a 500; a missing page or an unreachable
/// CMS never does.
async fn render_document(state: &AppState, slug: &str, locale: Locale) -> Response {
    let ((page, meta), settings) =
        tokio::join!(state.pages().with_metadata(slug, locale), state.globals().get());

    let chrome = SiteChrome::from_settings(settings.as_deref(), &state.config().site.name);

    let rendered = match &page {
        Some(page) => state.renderer().render_page(page, &meta, &chrome),
        None => state.renderer().render_not_found(&meta, &chrome),
    };

    match rendered {
        Ok(html) if page.is_some() => Html(html).into_response(),
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            error!(slug, "Error rendering page: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}
