//! JSON REST handlers for ads.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use squadup_app::ports::{AdRepository, GameRepository};
use squadup_domain::ad::{Ad, AdContact, AdListing, NewAd};
use squadup_domain::error::{NotFoundError, SquadUpError};
use squadup_domain::id::{AdId, GameId};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for posting an ad.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: Vec<i64>,
    pub hour_start: String,
    pub hour_end: String,
    pub use_voice_channel: bool,
}

impl From<CreateAdRequest> for NewAd {
    fn from(req: CreateAdRequest) -> Self {
        Self {
            name: req.name,
            years_playing: req.years_playing,
            discord: req.discord,
            week_days: req.week_days,
            hour_start: req.hour_start,
            hour_end: req.hour_end,
            use_voice_channel: req.use_voice_channel,
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Ad>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<AdListing>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the contact endpoint.
pub enum DiscordResponse {
    Ok(Json<AdContact>),
}

impl IntoResponse for DiscordResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn not_found(entity: &'static str, id: String) -> ApiError {
    ApiError::from(SquadUpError::from(NotFoundError { entity, id }))
}

/// `POST /games/:id/ad`
pub async fn create<GR, AR>(
    State(state): State<AppState<GR, AR>>,
    Path(id): Path<String>,
    Json(req): Json<CreateAdRequest>,
) -> Result<CreateResponse, ApiError>
where
    GR: GameRepository + Send + Sync + 'static,
    AR: AdRepository + Send + Sync + 'static,
{
    let game_id = GameId::from_str(&id).map_err(|_| not_found("Game", id))?;
    let ad = state.ad_service.create_ad(game_id, req.into()).await?;
    Ok(CreateResponse::Created(Json(ad)))
}

/// `GET /games/:id/ads`
pub async fn list_for_game<GR, AR>(
    State(state): State<AppState<GR, AR>>,
    Path(id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    GR: GameRepository + Send + Sync + 'static,
    AR: AdRepository + Send + Sync + 'static,
{
    // No ad can belong to an id that is not a game id.
    let Ok(game_id) = GameId::from_str(&id) else {
        return Ok(ListResponse::Ok(Json(Vec::new())));
    };
    let ads = state.ad_service.list_ads_for_game(game_id).await?;
    Ok(ListResponse::Ok(Json(ads)))
}

/// `GET /ads/:id/discord`
pub async fn discord<GR, AR>(
    State(state): State<AppState<GR, AR>>,
    Path(id): Path<String>,
) -> Result<DiscordResponse, ApiError>
where
    GR: GameRepository + Send + Sync + 'static,
    AR: AdRepository + Send + Sync + 'static,
{
    let ad_id = AdId::from_str(&id).map_err(|_| not_found("Ad", id))?;
    let contact = state.ad_service.reveal_contact(ad_id).await?;
    Ok(DiscordResponse::Ok(Json(contact)))
}
