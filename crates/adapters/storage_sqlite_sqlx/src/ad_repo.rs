//! `SQLite` implementation of [`AdRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::SecondsFormat;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use squadup_app::ports::AdRepository;
use squadup_domain::ad::Ad;
use squadup_domain::error::SquadUpError;
use squadup_domain::id::{AdId, GameId};
use squadup_domain::time::{MinuteOfDay, Timestamp};
use squadup_domain::week_days::WeekDays;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Ad`].
struct Wrapper(Ad);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Ad> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let game_id: String = row.try_get("game_id")?;
        let name: String = row.try_get("name")?;
        let years_playing: i32 = row.try_get("years_playing")?;
        let discord: String = row.try_get("discord")?;
        let week_days: String = row.try_get("week_days")?;
        let hour_start: i32 = row.try_get("hour_start")?;
        let hour_end: i32 = row.try_get("hour_end")?;
        let use_voice_channel: bool = row.try_get("use_voice_channel")?;
        let created_at: String = row.try_get("created_at")?;

        let id = AdId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let game_id =
            GameId::from_str(&game_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Ad {
            id,
            game_id,
            name,
            years_playing,
            discord,
            week_days: WeekDays::from_encoded(week_days),
            hour_start: MinuteOfDay::from_minutes(hour_start),
            hour_end: MinuteOfDay::from_minutes(hour_end),
            use_voice_channel,
            created_at,
        }))
    }
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

const INSERT: &str = r"
    INSERT INTO ads (
        id, game_id, name, years_playing, discord, week_days,
        hour_start, hour_end, use_voice_channel, created_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM ads WHERE id = ?";
const SELECT_BY_GAME: &str =
    "SELECT * FROM ads WHERE game_id = ? ORDER BY created_at DESC, rowid DESC";

/// `SQLite`-backed ad repository.
pub struct SqliteAdRepository {
    pool: SqlitePool,
}

impl SqliteAdRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AdRepository for SqliteAdRepository {
    fn create(&self, ad: Ad) -> impl Future<Output = Result<Ad, SquadUpError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(ad.id.to_string())
                .bind(ad.game_id.to_string())
                .bind(&ad.name)
                .bind(ad.years_playing)
                .bind(&ad.discord)
                .bind(ad.week_days.as_str())
                .bind(ad.hour_start.minutes())
                .bind(ad.hour_end.minutes())
                .bind(ad.use_voice_channel)
                .bind(encode_timestamp(ad.created_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(ad)
        }
    }

    fn get_by_id(
        &self,
        id: AdId,
    ) -> impl Future<Output = Result<Option<Ad>, SquadUpError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn find_by_game(
        &self,
        game_id: GameId,
    ) -> impl Future<Output = Result<Vec<Ad>, SquadUpError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_GAME)
                .bind(game_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
