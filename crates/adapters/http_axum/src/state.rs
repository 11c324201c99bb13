//! Shared application state for axum handlers.

use std::sync::Arc;

use squadup_app::ports::{AdRepository, GameRepository};
use squadup_app::services::ad_service::AdService;
use squadup_app::services::game_service::GameService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<GR, AR> {
    /// Game catalog service.
    pub game_service: Arc<GameService<GR>>,
    /// Ad posting and browsing service.
    pub ad_service: Arc<AdService<AR>>,
}

impl<GR, AR> Clone for AppState<GR, AR> {
    fn clone(&self) -> Self {
        Self {
            game_service: Arc::clone(&self.game_service),
            ad_service: Arc::clone(&self.ad_service),
        }
    }
}

impl<GR, AR> AppState<GR, AR>
where
    GR: GameRepository + Send + Sync + 'static,
    AR: AdRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(game_service: GameService<GR>, ad_service: AdService<AR>) -> Self {
        Self {
            game_service: Arc::new(game_service),
            ad_service: Arc::new(ad_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when the game service is also needed at startup, e.g. to
    /// seed the catalog, before constructing the HTTP state.
    pub fn from_arcs(
        game_service: Arc<GameService<GR>>,
        ad_service: Arc<AdService<AR>>,
    ) -> Self {
        Self {
            game_service,
            ad_service,
        }
    }
}
