//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod ads;
#[allow(clippy::missing_errors_doc)]
pub mod games;

use axum::Router;
use axum::routing::{get, post};

use squadup_app::ports::{AdRepository, GameRepository};

use crate::state::AppState;

/// Build the API router.
///
/// Both `/games/{id}/...` routes share the parameter name; the router
/// rejects differing names at the same position.
pub fn routes<GR, AR>() -> Router<AppState<GR, AR>>
where
    GR: GameRepository + Send + Sync + 'static,
    AR: AdRepository + Send + Sync + 'static,
{
    Router::new()
        // Games
        .route("/games", get(games::list::<GR, AR>))
        // Ads
        .route("/games/{id}/ad", post(ads::create::<GR, AR>))
        .route("/games/{id}/ads", get(ads::list_for_game::<GR, AR>))
        .route("/ads/{id}/discord", get(ads::discord::<GR, AR>))
}
