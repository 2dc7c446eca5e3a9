//! Domain error types.

use auction_store::StoreError;
use common::AuctionId;
use thiserror::Error;

/// Errors that can occur during auction operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No auction is stored under this id.
    #[error("Auction not found: {id}")]
    NotFound { id: AuctionId },

    /// The store did not confirm the write.
    ///
    /// Also raised when an update changed nothing, since the store then
    /// reports zero affected rows.
    #[error("{0}")]
    PersistenceFailure(&'static str),

    /// An error occurred in the auction store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
