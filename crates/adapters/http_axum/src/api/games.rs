//! JSON REST handlers for games.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use squadup_app::ports::{AdRepository, GameRepository};
use squadup_domain::game::GameSummary;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<GameSummary>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /games`
pub async fn list<GR, AR>(
    State(state): State<AppState<GR, AR>>,
) -> Result<ListResponse, ApiError>
where
    GR: GameRepository + Send + Sync + 'static,
    AR: AdRepository + Send + Sync + 'static,
{
    let games = state.game_service.list_games().await?;
    Ok(ListResponse::Ok(Json(games)))
}
