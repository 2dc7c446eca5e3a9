//! Auction aggregate and the item it owns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AuctionId, ItemId};

/// Lifecycle label of an auction.
///
/// Only `Live` is ever assigned here. `Finished` and `ReserveNotMet` are
/// set by whatever closes auctions once `auction_end` has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    /// Open for bidding.
    #[default]
    Live,

    /// Ended with the reserve met, or with no reserve.
    Finished,

    /// Ended with the highest bid below the reserve price.
    ReserveNotMet,
}

impl Status {
    /// Returns the status name as stored and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Live => "Live",
            Status::Finished => "Finished",
            Status::ReserveNotMet => "ReserveNotMet",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string names no known [`Status`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown auction status: {0}")]
pub struct ParseStatusError(pub String);

impl std::str::FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Live" => Ok(Status::Live),
            "Finished" => Ok(Status::Finished),
            "ReserveNotMet" => Ok(Status::ReserveNotMet),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// The physical object being auctioned.
///
/// An item has no life of its own: it is created, stored and deleted
/// together with the auction that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}

/// Aggregate root of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    pub id: AuctionId,
    /// Minimum accepted price; 0 means no reserve.
    pub reserve_price: i32,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub status: Status,
    pub item: Item,
}
