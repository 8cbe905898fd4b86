use super::health;
use axum::Router;
use axum::routing::get;

/// System routes every app mounts: liveness only, for now.
pub fn system_router<S>() -> Router<S>
where
    S: Send + Sync + Clone + 'static,
{
    Router::<S>::new().route("/health", get(health::health_handler))
}
