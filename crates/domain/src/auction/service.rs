//! Auction service: the decision logic behind every CRUD operation.

use auction_store::AuctionRepository;
use chrono::{DateTime, SubsecRound, Utc};
use common::{Auction, AuctionId};

use super::{ItemChanges, NewAuction};
use crate::error::DomainError;

/// Message reported when a new auction was not stored.
pub const CREATE_FAILED: &str = "Could not save changes to the DB";
/// Message reported when an update affected no rows.
pub const UPDATE_FAILED: &str = "Problem saving changes";
/// Message reported when a delete affected no rows.
pub const DELETE_FAILED: &str = "Could not update DB";

/// Service for managing auctions.
///
/// Validates identifiers, applies partial updates, and turns the store's
/// affected-row counts into success or [`DomainError::PersistenceFailure`].
/// Every operation is a single read and/or write round trip; nothing is
/// retried.
pub struct AuctionService<R: AuctionRepository> {
    repository: R,
}

impl<R: AuctionRepository> AuctionService<R> {
    /// Creates a new auction service over the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Lists every auction, ordered by item make.
    #[tracing::instrument(skip(self))]
    pub async fn list_auctions(&self) -> Result<Vec<Auction>, DomainError> {
        Ok(self.repository.list_auctions().await?)
    }

    /// Loads one auction with its item.
    #[tracing::instrument(skip(self))]
    pub async fn get_auction(&self, id: AuctionId) -> Result<Auction, DomainError> {
        self.repository
            .get_auction(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    /// Opens a new auction on behalf of `seller`.
    #[tracing::instrument(skip(self, input))]
    pub async fn create_auction(
        &self,
        seller: &str,
        input: NewAuction,
    ) -> Result<Auction, DomainError> {
        let auction = input.into_auction(seller.to_string(), now());

        let rows = self.repository.insert_auction(&auction).await?;
        if rows == 0 {
            return Err(persistence_failure(CREATE_FAILED));
        }

        metrics::counter!("auctions_created_total").increment(1);
        tracing::info!(auction_id = %auction.id, "auction created");
        Ok(auction)
    }

    /// Applies a partial update to the auction's item.
    ///
    /// Only make, model, color, mileage and year can change. An update
    /// that leaves every field as it was is reported as a
    /// [`DomainError::PersistenceFailure`].
    #[tracing::instrument(skip(self))]
    pub async fn update_auction(
        &self,
        id: AuctionId,
        changes: ItemChanges,
    ) -> Result<(), DomainError> {
        let mut auction = self.get_auction(id).await?;
        changes.apply_to(&mut auction.item);

        let rows = self
            .repository
            .update_item(id, &auction.item, now())
            .await?;
        if rows == 0 {
            return Err(persistence_failure(UPDATE_FAILED));
        }

        metrics::counter!("auctions_updated_total").increment(1);
        tracing::info!(auction_id = %id, "auction updated");
        Ok(())
    }

    /// Deletes an auction together with its item.
    #[tracing::instrument(skip(self))]
    pub async fn delete_auction(&self, id: AuctionId) -> Result<(), DomainError> {
        if !self.repository.auction_exists(id).await? {
            return Err(DomainError::NotFound { id });
        }

        let rows = self.repository.delete_auction(id).await?;
        if rows == 0 {
            return Err(persistence_failure(DELETE_FAILED));
        }

        metrics::counter!("auctions_deleted_total").increment(1);
        tracing::info!(auction_id = %id, "auction deleted");
        Ok(())
    }
}

/// Current time at the microsecond precision stores keep, so a returned
/// auction equals what a later read yields.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn persistence_failure(message: &'static str) -> DomainError {
    metrics::counter!("auction_persistence_failures_total").increment(1);
    tracing::warn!(reason = message, "store reported no affected rows");
    DomainError::PersistenceFailure(message)
}
