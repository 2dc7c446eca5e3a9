use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{Auction, AuctionId, Item};
use tokio::sync::RwLock;

use crate::{AuctionRepository, Result, StoreError};

/// Rows written per auction: the auction row and its item row.
const ROWS_PER_AUCTION: u64 = 2;

/// In-memory auction store.
///
/// Keeps auctions in insertion order and reports affected rows the same
/// way the PostgreSQL implementation does, so both behave alike behind
/// [`AuctionRepository`].
#[derive(Clone, Default)]
pub struct InMemoryAuctionStore {
    auctions: Arc<RwLock<Vec<Auction>>>,
}

impl InMemoryAuctionStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every stored auction.
    pub async fn clear(&self) {
        self.auctions.write().await.clear();
    }
}

#[async_trait]
impl AuctionRepository for InMemoryAuctionStore {
    async fn list_auctions(&self) -> Result<Vec<Auction>> {
        let mut auctions = self.auctions.read().await.clone();
        // sort_by is stable, so equal makes keep insertion order
        auctions.sort_by(|a, b| a.item.make.cmp(&b.item.make));
        Ok(auctions)
    }

    async fn get_auction(&self, id: AuctionId) -> Result<Option<Auction>> {
        let store = self.auctions.read().await;
        Ok(store.iter().find(|a| a.id == id).cloned())
    }

    async fn auction_exists(&self, id: AuctionId) -> Result<bool> {
        let store = self.auctions.read().await;
        Ok(store.iter().any(|a| a.id == id))
    }

    async fn count_auctions(&self) -> Result<u64> {
        Ok(self.auctions.read().await.len() as u64)
    }

    async fn insert_auction(&self, auction: &Auction) -> Result<u64> {
        let mut store = self.auctions.write().await;
        if store.iter().any(|a| a.id == auction.id) {
            return Err(StoreError::DuplicateAuction(auction.id));
        }
        store.push(auction.clone());
        Ok(ROWS_PER_AUCTION)
    }

    async fn update_item(
        &self,
        auction_id: AuctionId,
        item: &Item,
        updated_at: DateTime<Utc>,
    ) -> Result<u64> {
        let mut store = self.auctions.write().await;
        let Some(auction) = store.iter_mut().find(|a| a.id == auction_id) else {
            return Ok(0);
        };

        if auction.item == *item {
            return Ok(0);
        }

        auction.item = item.clone();
        auction.updated_at = updated_at;
        Ok(ROWS_PER_AUCTION)
    }

    async fn delete_auction(&self, id: AuctionId) -> Result<u64> {
        let mut store = self.auctions.write().await;
        let before = store.len();
        store.retain(|a| a.id != id);
        if store.len() == before {
            Ok(0)
        } else {
            Ok(ROWS_PER_AUCTION)
        }
    }
}
