//! Game: a catalog entry that ads are posted for.

use serde::{Deserialize, Serialize};

use crate::error::{SquadUpError, ValidationError};
use crate::id::GameId;

/// A game players can advertise for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub title: String,
    /// Cover art reference, usually a URL.
    pub banner_url: Option<String>,
}

impl Game {
    /// Create a builder for constructing a [`Game`].
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SquadUpError::Validation`] when `title` is empty.
    pub fn validate(&self) -> Result<(), SquadUpError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Game`].
#[derive(Debug, Default)]
pub struct GameBuilder {
    id: Option<GameId>,
    title: Option<String>,
    banner_url: Option<String>,
}

impl GameBuilder {
    #[must_use]
    pub fn id(mut self, id: GameId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn banner_url(mut self, banner_url: impl Into<String>) -> Self {
        self.banner_url = Some(banner_url.into());
        self
    }

    /// Consume the builder, validate, and return a [`Game`].
    ///
    /// # Errors
    ///
    /// Returns [`SquadUpError::Validation`] if `title` is missing or empty.
    pub fn build(self) -> Result<Game, SquadUpError> {
        let game = Game {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            banner_url: self.banner_url,
        };
        game.validate()?;
        Ok(game)
    }
}

/// Number of related records, keyed the way clients expect under `_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCount {
    pub ads: u64,
}

/// A [`Game`] annotated with how many ads were posted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    #[serde(flatten)]
    pub game: Game,
    #[serde(rename = "_count")]
    pub count: AdCount,
}

impl GameSummary {
    #[must_use]
    pub fn new(game: Game, ads: u64) -> Self {
        Self {
            game,
            count: AdCount { ads },
        }
    }
}
