//! Wire shapes of the auction resource and their mapping to domain types.

use chrono::{DateTime, Utc};
use common::{Auction, AuctionId, Status};
use domain::{ItemChanges, NewAuction};
use serde::{Deserialize, Serialize};

/// Auction as returned to clients, with item fields flattened alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionView {
    pub id: AuctionId,
    pub reserve_price: i32,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}

impl From<Auction> for AuctionView {
    fn from(auction: Auction) -> Self {
        let item = auction.item;
        Self {
            id: auction.id,
            reserve_price: auction.reserve_price,
            seller: auction.seller,
            winner: auction.winner,
            sold_amount: auction.sold_amount,
            current_high_bid: auction.current_high_bid,
            status: auction.status,
            created_at: auction.created_at,
            auction_end: auction.auction_end,
            updated_at: auction.updated_at,
            make: item.make,
            model: item.model,
            year: item.year,
            color: item.color,
            mileage: item.mileage,
            image_url: item.image_url,
        }
    }
}

/// Body of `POST /auctions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
    #[serde(default)]
    pub reserve_price: i32,
    pub auction_end: DateTime<Utc>,
}

impl From<CreateAuctionRequest> for NewAuction {
    fn from(req: CreateAuctionRequest) -> Self {
        NewAuction {
            reserve_price: req.reserve_price,
            auction_end: req.auction_end,
            make: req.make,
            model: req.model,
            year: req.year,
            color: req.color,
            mileage: req.mileage,
            image_url: req.image_url,
        }
    }
}

/// Body of `PUT /auctions/{id}`; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuctionRequest {
    pub make: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub year: Option<i32>,
}

impl From<UpdateAuctionRequest> for ItemChanges {
    fn from(req: UpdateAuctionRequest) -> Self {
        ItemChanges {
            make: req.make,
            model: req.model,
            color: req.color,
            mileage: req.mileage,
            year: req.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use common::{Item, ItemId};

    use super::*;

    fn sample_auction() -> Auction {
        let now = Utc::now();
        Auction {
            id: AuctionId::new(),
            reserve_price: 20000,
            seller: "bob".to_string(),
            winner: Some("alice".to_string()),
            sold_amount: Some(21000),
            current_high_bid: Some(21000),
            created_at: now,
            updated_at: now,
            auction_end: now,
            status: Status::Finished,
            item: Item {
                id: ItemId::new(),
                make: "Ford".to_string(),
                model: "GT".to_string(),
                year: 2020,
                color: "White".to_string(),
                mileage: 50000,
                image_url: "https://example.com/ford-gt.jpg".to_string(),
            },
        }
    }

    #[test]
    fn test_view_flattens_item_with_camel_case_names() {
        let auction = sample_auction();
        let id = auction.id;
        let json = serde_json::to_value(AuctionView::from(auction)).unwrap();

        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["reservePrice"], 20000);
        assert_eq!(json["seller"], "bob");
        assert_eq!(json["winner"], "alice");
        assert_eq!(json["soldAmount"], 21000);
        assert_eq!(json["currentHighBid"], 21000);
        assert_eq!(json["status"], "Finished");
        assert_eq!(json["make"], "Ford");
        assert_eq!(json["model"], "GT");
        assert_eq!(json["year"], 2020);
        assert_eq!(json["color"], "White");
        assert_eq!(json["mileage"], 50000);
        assert_eq!(json["imageUrl"], "https://example.com/ford-gt.jpg");
        assert!(json["createdAt"].is_string());
        assert!(json["auctionEnd"].is_string());
        assert!(json["updatedAt"].is_string());
        assert!(json.get("item").is_none());
        assert_eq!(json.as_object().unwrap().len(), 16);
    }

    #[test]
    fn test_view_keeps_unset_fields_as_null() {
        let mut auction = sample_auction();
        auction.winner = None;
        auction.sold_amount = None;
        auction.current_high_bid = None;

        let json = serde_json::to_value(AuctionView::from(auction)).unwrap();
        assert!(json["winner"].is_null());
        assert!(json["soldAmount"].is_null());
        assert!(json["currentHighBid"].is_null());
    }

    #[test]
    fn test_create_request_maps_to_new_auction() {
        let req: CreateAuctionRequest = serde_json::from_value(serde_json::json!({
            "make": "Ford",
            "model": "Mustang",
            "year": 2022,
            "color": "Red",
            "mileage": 1000,
            "imageUrl": "http://x",
            "reservePrice": 0,
            "auctionEnd": "2030-01-01T00:00:00Z"
        }))
        .unwrap();

        let input = NewAuction::from(req);
        assert_eq!(input.make, "Ford");
        assert_eq!(input.image_url, "http://x");
        assert_eq!(input.reserve_price, 0);
        assert_eq!(
            input.auction_end,
            "2030-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn test_create_request_defaults_reserve_price() {
        let req: CreateAuctionRequest = serde_json::from_value(serde_json::json!({
            "make": "Ford",
            "model": "Mustang",
            "year": 2022,
            "color": "Red",
            "mileage": 1000,
            "imageUrl": "http://x",
            "auctionEnd": "2030-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(req.reserve_price, 0);
    }

    #[test]
    fn test_update_request_accepts_partial_and_null_fields() {
        let req: UpdateAuctionRequest =
            serde_json::from_value(serde_json::json!({ "mileage": 1500, "color": null }))
                .unwrap();

        let changes = ItemChanges::from(req);
        assert_eq!(changes.mileage, Some(1500));
        assert!(changes.color.is_none());
        assert!(changes.make.is_none());
    }
}
