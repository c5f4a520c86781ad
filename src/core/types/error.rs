use thiserror::Error;

use crate::types::ValidationError;

pub type StoreResult<T> = Result<T, StoreError>;
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("stored dna column is not a valid row array: {0}")]
    InvalidDna(#[from] serde_json::Error),

    #[error("stored timestamp is not valid RFC 3339: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    #[error("stored record {0} holds a grid that fails validation")]
    CorruptGrid(i64),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("unknown verdict {0:?}; expected \"mutant\" or \"human\"")]
    UnknownVerdict(String),
}
