//! Error types shared by the scheduler, the storage layer and import/export.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewError {
    /// Rating outside HARD / MEDIUM / EASY. Raised before any state is computed.
    #[error("invalid rating '{0}': expected HARD, MEDIUM or EASY")]
    InvalidRating(String),

    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("item conflict: {0}")]
    ItemConflict(String),

    /// The database could not durably record or read review data.
    #[error("persistence failure: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
