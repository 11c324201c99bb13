//! Game service: use-cases for the game catalog.

use squadup_domain::error::SquadUpError;
use squadup_domain::game::{Game, GameSummary};

use crate::ports::GameRepository;

/// Application service for reading and seeding the game catalog.
pub struct GameService<R> {
    repo: R,
}

impl<R: GameRepository> GameService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every game with the number of ads posted for it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_games(&self) -> Result<Vec<GameSummary>, SquadUpError> {
        self.repo.get_all_with_ad_count().await
    }

    /// Add a game to the catalog, leaving an existing game with the same id
    /// untouched.
    ///
    /// Returns whether the game was newly stored.
    ///
    /// # Errors
    ///
    /// Returns [`SquadUpError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    pub async fn register_game(&self, game: Game) -> Result<bool, SquadUpError> {
        game.validate()?;
        let id = game.id;
        let inserted = self.repo.insert_if_missing(game).await?;
        if inserted {
            tracing::info!(game_id = %id, "registered game");
        } else {
            tracing::debug!(game_id = %id, "game already registered");
        }
        Ok(inserted)
    }
}
