use thiserror::Error;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0} must be set")]
    MissingEnv(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Transaction error: {0}")]
    Transaction(String),
}
