//! Sample auctions used to populate an empty store.

use chrono::{DateTime, Duration, Utc};
use common::{Auction, AuctionId, Item, ItemId, Status};

use crate::{AuctionRepository, AuctionRepositoryExt, Result};

struct SeedAuction {
    seller: &'static str,
    reserve_price: i32,
    status: Status,
    days_until_end: i64,
    make: &'static str,
    model: &'static str,
    color: &'static str,
    mileage: i32,
    year: i32,
    image: &'static str,
}

const CATALOGUE: &[SeedAuction] = &[
    SeedAuction {
        seller: "bob",
        reserve_price: 20000,
        status: Status::Live,
        days_until_end: 10,
        make: "Ford",
        model: "GT",
        color: "White",
        mileage: 50000,
        year: 2020,
        image: "ford-gt.jpg",
    },
    SeedAuction {
        seller: "alice",
        reserve_price: 90000,
        status: Status::Live,
        days_until_end: 60,
        make: "Bugatti",
        model: "Veyron",
        color: "Black",
        mileage: 15035,
        year: 2018,
        image: "bugatti-veyron.jpg",
    },
    SeedAuction {
        seller: "bob",
        reserve_price: 0,
        status: Status::Live,
        days_until_end: 4,
        make: "Ford",
        model: "Mustang",
        color: "Black",
        mileage: 65125,
        year: 2023,
        image: "ford-mustang.jpg",
    },
    SeedAuction {
        seller: "tom",
        reserve_price: 50000,
        status: Status::ReserveNotMet,
        days_until_end: -10,
        make: "Mercedes",
        model: "SLK",
        color: "Silver",
        mileage: 15001,
        year: 2020,
        image: "mercedes-slk.jpg",
    },
    SeedAuction {
        seller: "alice",
        reserve_price: 20000,
        status: Status::Live,
        days_until_end: 30,
        make: "BMW",
        model: "X1",
        color: "White",
        mileage: 90000,
        year: 2017,
        image: "bmw-x1.jpg",
    },
    SeedAuction {
        seller: "alice",
        reserve_price: 20000,
        status: Status::Live,
        days_until_end: 45,
        make: "Ferrari",
        model: "Spider",
        color: "Red",
        mileage: 50000,
        year: 2015,
        image: "ferrari-spider.jpg",
    },
    SeedAuction {
        seller: "bob",
        reserve_price: 150000,
        status: Status::Live,
        days_until_end: 13,
        make: "Ferrari",
        model: "F-430",
        color: "Red",
        mileage: 5000,
        year: 2022,
        image: "ferrari-f430.jpg",
    },
    SeedAuction {
        seller: "bob",
        reserve_price: 0,
        status: Status::Finished,
        days_until_end: -2,
        make: "Audi",
        model: "R8",
        color: "White",
        mileage: 10050,
        year: 2021,
        image: "audi-r8.jpg",
    },
    SeedAuction {
        seller: "tom",
        reserve_price: 20000,
        status: Status::Live,
        days_until_end: 19,
        make: "Audi",
        model: "TT",
        color: "Black",
        mileage: 25400,
        year: 2020,
        image: "audi-tt.jpg",
    },
    SeedAuction {
        seller: "bob",
        reserve_price: 20000,
        status: Status::Live,
        days_until_end: 48,
        make: "Ford",
        model: "Model T",
        color: "Rust",
        mileage: 150150,
        year: 1938,
        image: "ford-model-t.jpg",
    },
];

const IMAGE_BASE_URL: &str = "https://images.example.com/auctions";

/// Builds the sample catalogue relative to `now`.
///
/// Finished auctions carry a winner and a sold amount; auctions that ended
/// below their reserve carry only a high bid.
pub fn sample_auctions(now: DateTime<Utc>) -> Vec<Auction> {
    CATALOGUE
        .iter()
        .map(|seed| {
            let (winner, sold_amount, current_high_bid) = match seed.status {
                Status::Live => (None, None, None),
                Status::Finished => (Some("alice".to_string()), Some(75000), Some(75000)),
                Status::ReserveNotMet => (None, None, Some(seed.reserve_price / 2)),
            };

            Auction {
                id: AuctionId::new(),
                reserve_price: seed.reserve_price,
                seller: seed.seller.to_string(),
                winner,
                sold_amount,
                current_high_bid,
                created_at: now,
                updated_at: now,
                auction_end: now + Duration::days(seed.days_until_end),
                status: seed.status,
                item: Item {
                    id: ItemId::new(),
                    make: seed.make.to_string(),
                    model: seed.model.to_string(),
                    year: seed.year,
                    color: seed.color.to_string(),
                    mileage: seed.mileage,
                    image_url: format!("{IMAGE_BASE_URL}/{}", seed.image),
                },
            }
        })
        .collect()
}

/// Inserts the sample catalogue if the store holds no auctions yet.
///
/// Returns the number of auctions inserted (0 when the store was not empty).
pub async fn seed_if_empty<R: AuctionRepository + ?Sized>(repository: &R) -> Result<usize> {
    if !repository.is_empty().await? {
        tracing::info!("auction store already populated, skipping seed");
        return Ok(0);
    }

    let auctions = sample_auctions(Utc::now());
    repository.insert_all(&auctions).await?;
    tracing::info!(count = auctions.len(), "seeded auction store");
    Ok(auctions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryAuctionStore;

    #[test]
    fn catalogue_covers_every_status() {
        let auctions = sample_auctions(Utc::now());
        assert_eq!(auctions.len(), CATALOGUE.len());
        for status in [Status::Live, Status::Finished, Status::ReserveNotMet] {
            assert!(auctions.iter().any(|a| a.status == status));
        }
    }

    #[test]
    fn finished_auctions_have_winner() {
        let auctions = sample_auctions(Utc::now());
        for auction in auctions.iter().filter(|a| a.status == Status::Finished) {
            assert!(auction.winner.is_some());
            assert!(auction.sold_amount.is_some());
            assert!(auction.auction_end < auction.created_at);
        }
    }

    #[tokio::test]
    async fn seed_only_populates_empty_store() {
        let store = InMemoryAuctionStore::new();

        let inserted = seed_if_empty(&store).await.unwrap();
        assert_eq!(inserted, CATALOGUE.len());
        assert_eq!(store.count_auctions().await.unwrap(), CATALOGUE.len() as u64);

        let inserted_again = seed_if_empty(&store).await.unwrap();
        assert_eq!(inserted_again, 0);
        assert_eq!(store.count_auctions().await.unwrap(), CATALOGUE.len() as u64);
    }
}
