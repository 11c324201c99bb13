//! Game catalog seeding.
//!
//! Games have no HTTP creation endpoint; operators list them in a TOML file
//! that is registered at startup:
//!
//! ```toml
//! [[games]]
//! id = "4f9c1c4e-1f57-4c57-9d43-7c0b0f0b5a8e"
//! title = "League of Legends"
//! banner_url = "https://cdn.example/lol.jpg"
//! ```
//!
//! Registration ignores games whose id is already stored, so the same file
//! can be applied on every start.

use serde::Deserialize;

use squadup_app::ports::GameRepository;
use squadup_app::services::game_service::GameService;
use squadup_domain::error::SquadUpError;
use squadup_domain::game::Game;
use squadup_domain::id::GameId;

/// Parsed catalog file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub games: Vec<CatalogEntry>,
}

/// One game in the catalog file.
#[derive(Debug, Deserialize)]
pub struct CatalogEntry {
    pub id: GameId,
    pub title: String,
    pub banner_url: Option<String>,
}

impl Catalog {
    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &str) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Register every game of the catalog, returning how many were new.
    ///
    /// # Errors
    ///
    /// Returns [`SquadUpError::Validation`] for an entry with an empty
    /// title, or a storage error from the repository. Entries before the
    /// failing one stay registered.
    pub async fn seed<R: GameRepository>(
        self,
        service: &GameService<R>,
    ) -> Result<usize, SquadUpError> {
        let mut added = 0;
        for entry in self.games {
            let mut builder = Game::builder().id(entry.id).title(entry.title);
            if let Some(banner_url) = entry.banner_url {
                builder = builder.banner_url(banner_url);
            }
            if service.register_game(builder.build()?).await? {
                added += 1;
            }
        }
        Ok(added)
    }
}

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// TOML parse failure.
    #[error("failed to parse catalog file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read catalog file")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use squadup_adapter_storage_sqlite_sqlx::{Config, SqliteGameRepository};

    const CATALOG: &str = r#"
        [[games]]
        id = "4f9c1c4e-1f57-4c57-9d43-7c0b0f0b5a8e"
        title = "League of Legends"
        banner_url = "https://cdn.example/lol.jpg"

        [[games]]
        id = "0b8f3f8e-6a53-4d2e-9d1b-2f1c2b7e9a10"
        title = "Counter-Strike 2"
    "#;

    async fn service() -> GameService<SqliteGameRepository> {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        GameService::new(SqliteGameRepository::new(db.pool().clone()))
    }

    #[test]
    fn should_parse_catalog_entries() {
        let catalog: Catalog = toml::from_str(CATALOG).unwrap();
        assert_eq!(catalog.games.len(), 2);
        assert_eq!(catalog.games[0].title, "League of Legends");
        assert!(catalog.games[1].banner_url.is_none());
    }

    #[test]
    fn should_parse_empty_catalog() {
        let catalog: Catalog = toml::from_str("").unwrap();
        assert!(catalog.games.is_empty());
    }

    #[test]
    fn should_reject_entry_with_invalid_id() {
        let result: Result<Catalog, _> = toml::from_str(
            r#"
            [[games]]
            id = "lol"
            title = "League of Legends"
            "#,
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn should_seed_every_game_once() {
        let svc = service().await;

        let first: Catalog = toml::from_str(CATALOG).unwrap();
        assert_eq!(first.seed(&svc).await.unwrap(), 2);

        let again: Catalog = toml::from_str(CATALOG).unwrap();
        assert_eq!(again.seed(&svc).await.unwrap(), 0);

        let games = svc.list_games().await.unwrap();
        assert_eq!(games.len(), 2);
    }

    #[tokio::test]
    async fn should_fail_seeding_when_title_is_empty() {
        let svc = service().await;
        let catalog: Catalog = toml::from_str(
            r#"
            [[games]]
            id = "4f9c1c4e-1f57-4c57-9d43-7c0b0f0b5a8e"
            title = ""
            "#,
        )
        .unwrap();

        let result = catalog.seed(&svc).await;
        assert!(matches!(result, Err(SquadUpError::Validation(_))));
    }
}
