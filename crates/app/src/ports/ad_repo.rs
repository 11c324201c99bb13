//! Ad repository port: persistence for ads.

use std::future::Future;

use squadup_domain::ad::Ad;
use squadup_domain::error::SquadUpError;
use squadup_domain::id::{AdId, GameId};

/// Repository for persisting and querying [`Ad`]s.
///
/// Ads are append-only: there is no update or delete.
pub trait AdRepository {
    /// Create a new ad in storage.
    ///
    /// Fails with a storage error when `ad.game_id` does not reference a
    /// stored game.
    fn create(&self, ad: Ad) -> impl Future<Output = Result<Ad, SquadUpError>> + Send;

    /// Get an ad by its unique identifier.
    fn get_by_id(
        &self,
        id: AdId,
    ) -> impl Future<Output = Result<Option<Ad>, SquadUpError>> + Send;

    /// Find the ads posted for a game, ordered newest-first.
    fn find_by_game(
        &self,
        game_id: GameId,
    ) -> impl Future<Output = Result<Vec<Ad>, SquadUpError>> + Send;
}
