//! Persistence for auctions and their items.
//!
//! [`AuctionRepository`] is the seam the domain layer talks to; it is
//! implemented by [`InMemoryAuctionStore`] and [`PostgresAuctionStore`].

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;
pub mod seed;

pub use common::{Auction, AuctionId, Item, ItemId, Status};
pub use error::{Result, StoreError};
pub use memory::InMemoryAuctionStore;
pub use postgres::PostgresAuctionStore;
pub use repository::{AuctionRepository, AuctionRepositoryExt};
pub use seed::{sample_auctions, seed_if_empty};
