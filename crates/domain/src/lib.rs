//! Domain layer for the auction service.
//!
//! This crate provides:
//! - `AuctionService`, which owns the decision logic of every CRUD operation
//! - `NewAuction` and `ItemChanges`, the inputs for creation and partial update
//! - `DomainError`, the outcomes a caller has to map to a response

pub mod auction;
pub mod error;

pub use auction::{AuctionService, ItemChanges, NewAuction};
pub use common::{Auction, AuctionId, Item, ItemId, Status};
pub use error::DomainError;
