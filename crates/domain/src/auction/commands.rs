//! Inputs accepted by the auction service.

use chrono::{DateTime, Utc};
use common::{Auction, AuctionId, Item, ItemId, Status};

/// Everything needed to open a new auction, apart from the seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuction {
    pub reserve_price: i32,
    pub auction_end: DateTime<Utc>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}

impl NewAuction {
    /// Builds the auction aggregate with fresh ids.
    ///
    /// Status is always `Live` and both timestamps are `now`; bid and sale
    /// fields start empty.
    pub fn into_auction(self, seller: String, now: DateTime<Utc>) -> Auction {
        Auction {
            id: AuctionId::new(),
            reserve_price: self.reserve_price,
            seller,
            winner: None,
            sold_amount: None,
            current_high_bid: None,
            created_at: now,
            updated_at: now,
            auction_end: self.auction_end,
            status: Status::Live,
            item: Item {
                id: ItemId::new(),
                make: self.make,
                model: self.model,
                year: self.year,
                color: self.color,
                mileage: self.mileage,
                image_url: self.image_url,
            },
        }
    }
}

/// Partial update of an auction's item.
///
/// `Some` overwrites the stored value, `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub make: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub year: Option<i32>,
}

impl ItemChanges {
    /// Applies the supplied fields to `item`.
    pub fn apply_to(self, item: &mut Item) {
        if let Some(make) = self.make {
            item.make = make;
        }
        if let Some(model) = self.model {
            item.model = model;
        }
        if let Some(color) = self.color {
            item.color = color;
        }
        if let Some(mileage) = self.mileage {
            item.mileage = mileage;
        }
        if let Some(year) = self.year {
            item.year = year;
        }
    }
}
