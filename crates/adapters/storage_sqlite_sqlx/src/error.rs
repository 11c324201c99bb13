//! Storage-specific error type wrapping sqlx errors.

use squadup_domain::error::SquadUpError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for SquadUpError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_storage_error_as_opaque_domain_error() {
        let err: SquadUpError = StorageError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, SquadUpError::Storage(_)));
    }
}
