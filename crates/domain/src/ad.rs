//! Ad: a "looking for group" post for a [`Game`](crate::game::Game).

use serde::{Deserialize, Serialize};

use crate::error::SquadUpError;
use crate::id::{AdId, GameId};
use crate::time::{MinuteOfDay, Timestamp};
use crate::week_days::WeekDays;

/// An ad as stored.
///
/// Serializes with the storage encodings intact: `weekDays` is the
/// comma-delimited string and the hours are minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: AdId,
    pub game_id: GameId,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: WeekDays,
    pub hour_start: MinuteOfDay,
    pub hour_end: MinuteOfDay,
    pub use_voice_channel: bool,
    pub created_at: Timestamp,
}

/// A submitted ad, still in the shape clients send it.
#[derive(Debug, Clone)]
pub struct NewAd {
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: Vec<i64>,
    /// `"HH:MM"`.
    pub hour_start: String,
    /// `"HH:MM"`.
    pub hour_end: String,
    pub use_voice_channel: bool,
}

impl NewAd {
    /// Encode the submission for storage under `game_id`.
    ///
    /// No field is checked beyond what the encodings need: the hours must
    /// evaluate to a number of minutes.
    ///
    /// # Errors
    ///
    /// Returns [`SquadUpError::Validation`] when either hour string has no
    /// `:` separator or a non-numeric component.
    pub fn into_ad(self, game_id: GameId, created_at: Timestamp) -> Result<Ad, SquadUpError> {
        let hour_start = MinuteOfDay::parse_hour_string(&self.hour_start)?;
        let hour_end = MinuteOfDay::parse_hour_string(&self.hour_end)?;

        Ok(Ad {
            id: AdId::new(),
            game_id,
            name: self.name,
            years_playing: self.years_playing,
            discord: self.discord,
            week_days: WeekDays::from_days(&self.week_days),
            hour_start,
            hour_end,
            use_voice_channel: self.use_voice_channel,
            created_at,
        })
    }
}

/// Public view of an ad, as listed under a game.
///
/// Leaves out the contact handle, which is only revealed on request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdListing {
    pub id: AdId,
    pub name: String,
    pub week_days: Vec<String>,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: String,
    pub hour_end: String,
}

impl From<Ad> for AdListing {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id,
            name: ad.name,
            week_days: ad.week_days.tokens(),
            use_voice_channel: ad.use_voice_channel,
            years_playing: ad.years_playing,
            hour_start: ad.hour_start.to_hour_string(),
            hour_end: ad.hour_end.to_hour_string(),
        }
    }
}

/// The contact handle of an ad's author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdContact {
    pub discord: String,
}

impl From<Ad> for AdContact {
    fn from(ad: Ad) -> Self {
        Self {
            discord: ad.discord,
        }
    }
}
