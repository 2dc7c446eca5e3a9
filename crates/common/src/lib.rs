//! Shared types for the auction service.
//!
//! Holds the identifiers and the entity model (`Auction` owning one
//! `Item`) that both the storage layer and the domain layer speak.

pub mod auction;
pub mod types;

pub use auction::{Auction, Item, ParseStatusError, Status};
pub use types::{AuctionId, ItemId};
