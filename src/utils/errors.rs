// src/utils/errors.rs

use thiserror::Error;

/// Everything that can go wrong behind the database seam.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("DATABASE_URL missing from env")]
    MissingUrl,
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
