use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{Auction, AuctionId, Item};

use crate::Result;

/// Core trait for auction storage.
///
/// Write methods return the number of rows they affected, counting the
/// auction row and the item row separately. A write that changed nothing
/// reports 0; callers decide what that means.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait AuctionRepository: Send + Sync {
    /// Returns every auction with its item, ordered by item make ascending.
    ///
    /// Makes compare byte-wise and case-sensitively, so `"BMW"` sorts
    /// before `"audi"` regardless of the database locale.
    /// Auctions sharing a make keep the store's natural order.
    async fn list_auctions(&self) -> Result<Vec<Auction>>;

    /// Loads an auction together with its item.
    ///
    /// Returns None if no auction has this id.
    async fn get_auction(&self, id: AuctionId) -> Result<Option<Auction>>;

    /// Checks whether an auction exists without loading its item.
    async fn auction_exists(&self, id: AuctionId) -> Result<bool>;

    /// Returns the number of stored auctions.
    async fn count_auctions(&self) -> Result<u64>;

    /// Stores a new auction and its item in one atomic write.
    async fn insert_auction(&self, auction: &Auction) -> Result<u64>;

    /// Overwrites the item of an auction.
    ///
    /// Rows are only touched when at least one item field differs from the
    /// stored value; `updated_at` is then written to the auction row too.
    /// An unchanged item, or an unknown auction, reports 0.
    async fn update_item(
        &self,
        auction_id: AuctionId,
        item: &Item,
        updated_at: DateTime<Utc>,
    ) -> Result<u64>;

    /// Removes an auction and, with it, its item.
    async fn delete_auction(&self, id: AuctionId) -> Result<u64>;
}

/// Extension trait providing convenience methods for auction repositories.
#[async_trait]
pub trait AuctionRepositoryExt: AuctionRepository {
    /// Returns true if no auction is stored.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.count_auctions().await? == 0)
    }

    /// Inserts several auctions one after the other, summing affected rows.
    async fn insert_all(&self, auctions: &[Auction]) -> Result<u64> {
        let mut rows = 0;
        for auction in auctions {
            rows += self.insert_auction(auction).await?;
        }
        Ok(rows)
    }
}

// Blanket implementation for all AuctionRepository implementations
impl<T: AuctionRepository + ?Sized> AuctionRepositoryExt for T {}
