//! Centralized error types for the meme arena

use thiserror::Error;

/// Main service error type
#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Voter {voter} has already voted for meme {meme_id}")]
    DuplicateVote { voter: String, meme_id: i64 },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Storage-specific errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

/// Result type alias for arena operations
pub type ArenaResult<T> = Result<T, ArenaError>;

impl ArenaError {
    pub fn validation(message: impl Into<String>) -> Self {
        ArenaError::Validation(message.into())
    }

    /// True for errors caused by the caller rather than by the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ArenaError::Validation(_) | ArenaError::NotFound(_) | ArenaError::DuplicateVote { .. }
        )
    }
}

/// Helper to convert sqlx errors
impl From<sqlx::Error> for ArenaError {
    fn from(err: sqlx::Error) -> Self {
        ArenaError::Storage(StorageError::Database(err.to_string()))
    }
}

impl From<sqlx::migrate::MigrateError> for ArenaError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        ArenaError::Storage(StorageError::MigrationFailed(err.to_string()))
    }
}

/// Helper to convert HTTP client errors from the minting service
impl From<reqwest::Error> for ArenaError {
    fn from(err: reqwest::Error) -> Self {
        ArenaError::ExternalService(err.to_string())
    }
}

impl From<serde_json::Error> for ArenaError {
    fn from(err: serde_json::Error) -> Self {
        ArenaError::ExternalService(format!("Invalid payload: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(ArenaError::validation("name is required").is_client_error());
        assert!(ArenaError::NotFound("meme 1".into()).is_client_error());
        assert!(ArenaError::DuplicateVote { voter: "0xabc".into(), meme_id: 1 }.is_client_error());
        assert!(!ArenaError::Storage(StorageError::Database("down".into())).is_client_error());
        assert!(!ArenaError::ExternalService("mint failed".into()).is_client_error());
    }

    #[test]
    fn test_sqlx_error_maps_to_storage() {
        let err: ArenaError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ArenaError::Storage(StorageError::Database(_))));
    }
}
