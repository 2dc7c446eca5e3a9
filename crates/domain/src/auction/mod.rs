//! Auction inputs and the service applying them.

mod commands;
mod service;

pub use commands::{ItemChanges, NewAuction};
pub use service::{AuctionService, CREATE_FAILED, DELETE_FAILED, UPDATE_FAILED};
