//! `SQLite` implementation of [`GameRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use squadup_app::ports::GameRepository;
use squadup_domain::error::SquadUpError;
use squadup_domain::game::{Game, GameSummary};
use squadup_domain::id::GameId;

use crate::error::StorageError;

/// Wrapper for converting a game row joined with its ad count into a
/// domain [`GameSummary`].
struct Wrapper(GameSummary);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let banner_url: Option<String> = row.try_get("banner_url")?;
        let ad_count: i64 = row.try_get("ad_count")?;

        let id = GameId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let ad_count =
            u64::try_from(ad_count).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(GameSummary::new(
            Game {
                id,
                title,
                banner_url,
            },
            ad_count,
        )))
    }
}

const INSERT_IF_MISSING: &str =
    "INSERT INTO games (id, title, banner_url) VALUES (?, ?, ?) ON CONFLICT (id) DO NOTHING";
const SELECT_ALL_WITH_AD_COUNT: &str = r"
    SELECT games.id, games.title, games.banner_url, COUNT(ads.id) AS ad_count
    FROM games
    LEFT JOIN ads ON ads.game_id = games.id
    GROUP BY games.id
";

/// `SQLite`-backed game repository.
pub struct SqliteGameRepository {
    pool: SqlitePool,
}

impl SqliteGameRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl GameRepository for SqliteGameRepository {
    fn insert_if_missing(
        &self,
        game: Game,
    ) -> impl Future<Output = Result<bool, SquadUpError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT_IF_MISSING)
                .bind(game.id.to_string())
                .bind(&game.title)
                .bind(&game.banner_url)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn get_all_with_ad_count(
        &self,
    ) -> impl Future<Output = Result<Vec<GameSummary>, SquadUpError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL_WITH_AD_COUNT)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteGameRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteGameRepository::new(db.pool().clone())
    }

    fn test_game(title: &str) -> Game {
        Game::builder()
            .title(title)
            .banner_url(format!("https://cdn.example/{title}.jpg"))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_insert_and_list_game_with_zero_ads() {
        let repo = setup().await;
        let game = test_game("Fortnite");
        let id = game.id;

        assert!(repo.insert_if_missing(game).await.unwrap());

        let all = repo.get_all_with_ad_count().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].game.id, id);
        assert_eq!(all[0].game.title, "Fortnite");
        assert_eq!(
            all[0].game.banner_url.as_deref(),
            Some("https://cdn.example/Fortnite.jpg")
        );
        assert_eq!(all[0].count.ads, 0);
    }

    #[tokio::test]
    async fn should_ignore_insert_when_id_exists() {
        let repo = setup().await;
        let game = test_game("Fortnite");
        let mut renamed = game.clone();
        renamed.title = "Something else".to_string();

        assert!(repo.insert_if_missing(game).await.unwrap());
        assert!(!repo.insert_if_missing(renamed).await.unwrap());

        let all = repo.get_all_with_ad_count().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].game.title, "Fortnite");
    }

    #[tokio::test]
    async fn should_store_game_without_banner() {
        let repo = setup().await;
        let game = Game::builder().title("Chess").build().unwrap();
        repo.insert_if_missing(game).await.unwrap();

        let all = repo.get_all_with_ad_count().await.unwrap();
        assert!(all[0].game.banner_url.is_none());
    }

    #[tokio::test]
    async fn should_list_every_game() {
        let repo = setup().await;
        repo.insert_if_missing(test_game("CS2")).await.unwrap();
        repo.insert_if_missing(test_game("Dota 2")).await.unwrap();

        let all = repo.get_all_with_ad_count().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
