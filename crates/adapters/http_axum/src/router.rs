//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use squadup_app::ports::{AdRepository, GameRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API routes at the root next to `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a permissive
/// [`CorsLayer`] so browsers on any origin can call the API.
pub fn build<GR, AR>(state: AppState<GR, AR>) -> Router
where
    GR: GameRepository + Send + Sync + 'static,
    AR: AdRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
