//! Ad service: use-cases for posting and browsing ads.

use squadup_domain::ad::{Ad, AdContact, AdListing, NewAd};
use squadup_domain::error::{NotFoundError, SquadUpError};
use squadup_domain::id::{AdId, GameId};
use squadup_domain::time::now;

use crate::ports::AdRepository;

/// Application service for ads.
pub struct AdService<R> {
    repo: R,
}

impl<R: AdRepository> AdService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Post a new ad for `game_id`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`SquadUpError::Validation`] if an hour string cannot be
    /// evaluated, or a storage error from the repository (including an
    /// unknown `game_id`).
    pub async fn create_ad(&self, game_id: GameId, new_ad: NewAd) -> Result<Ad, SquadUpError> {
        let ad = new_ad.into_ad(game_id, now())?;
        let created = self.repo.create(ad).await?;
        tracing::info!(ad_id = %created.id, game_id = %game_id, "ad created");
        Ok(created)
    }

    /// List the ads posted for a game, newest first, without contact handles.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_ads_for_game(
        &self,
        game_id: GameId,
    ) -> Result<Vec<AdListing>, SquadUpError> {
        let ads = self.repo.find_by_game(game_id).await?;
        Ok(ads.into_iter().map(AdListing::from).collect())
    }

    /// Reveal the contact handle of an ad's author.
    ///
    /// # Errors
    ///
    /// Returns [`SquadUpError::NotFound`] when no ad with `id` exists,
    /// or a storage error from the repository.
    pub async fn reveal_contact(&self, id: AdId) -> Result<AdContact, SquadUpError> {
        let ad = self.repo.get_by_id(id).await?.ok_or_else(|| NotFoundError {
            entity: "Ad",
            id: id.to_string(),
        })?;
        Ok(AdContact::from(ad))
    }
}
