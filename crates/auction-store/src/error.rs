use common::{AuctionId, ParseStatusError};
use thiserror::Error;

/// Errors that can occur when interacting with the auction store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An auction with the same id is already stored.
    #[error("Auction already exists: {0}")]
    DuplicateAuction(AuctionId),

    /// A stored status column holds a value outside the known set.
    #[error("Invalid stored data: {0}")]
    InvalidStatus(#[from] ParseStatusError),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
