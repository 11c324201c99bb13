//! Game repository port: persistence for the game catalog.

use std::future::Future;

use squadup_domain::error::SquadUpError;
use squadup_domain::game::{Game, GameSummary};

/// Repository for persisting and querying [`Game`]s.
pub trait GameRepository {
    /// Store a game unless one with the same id already exists.
    ///
    /// Resolves to `true` when a row was written.
    fn insert_if_missing(
        &self,
        game: Game,
    ) -> impl Future<Output = Result<bool, SquadUpError>> + Send;

    /// Get every game together with the number of ads posted for it.
    fn get_all_with_ad_count(
        &self,
    ) -> impl Future<Output = Result<Vec<GameSummary>, SquadUpError>> + Send;
}
