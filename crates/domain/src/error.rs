//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SquadUpError`] via `From`.

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum SquadUpError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Opaque failure from a persistence adapter.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Input that the domain cannot make sense of.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("game title must not be empty")]
    EmptyTitle,

    /// A time of day whose components are not integers, e.g. `"9am"`.
    #[error("invalid time of day: {0:?}")]
    InvalidTimeOfDay(String),
}

/// A lookup that expected exactly one record and found none.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
