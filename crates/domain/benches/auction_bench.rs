use auction_store::{InMemoryAuctionStore, seed_if_empty};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{AuctionService, ItemChanges, NewAuction};

fn new_auction(make: &str) -> NewAuction {
    NewAuction {
        reserve_price: 20000,
        auction_end: "2030-01-01T00:00:00Z".parse().unwrap(),
        make: make.to_string(),
        model: "Bench".to_string(),
        year: 2021,
        color: "Grey".to_string(),
        mileage: 1000,
        image_url: "https://example.com/bench.jpg".to_string(),
    }
}

fn bench_create_auction(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/create_auction", |b| {
        b.iter(|| {
            rt.block_on(async {
                let service = AuctionService::new(InMemoryAuctionStore::new());
                service
                    .create_auction("bench", new_auction("Ford"))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_update_auction(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = AuctionService::new(InMemoryAuctionStore::new());
    let auction = rt
        .block_on(service.create_auction("bench", new_auction("Ford")))
        .unwrap();
    let mut mileage = auction.item.mileage;

    c.bench_function("domain/update_auction", |b| {
        b.iter(|| {
            // Each iteration must change a value, or the update reports no effect.
            mileage += 1;
            rt.block_on(async {
                service
                    .update_auction(
                        auction.id,
                        ItemChanges {
                            mileage: Some(mileage),
                            ..Default::default()
                        },
                    )
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_list_auctions(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryAuctionStore::new();
    rt.block_on(seed_if_empty(&store)).unwrap();
    let service = AuctionService::new(store);
    for make in ["Porsche", "Volvo", "Alfa Romeo", "Toyota"] {
        rt.block_on(service.create_auction("bench", new_auction(make)))
            .unwrap();
    }

    c.bench_function("domain/list_auctions", |b| {
        b.iter(|| {
            rt.block_on(async {
                service.list_auctions().await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_create_auction,
    bench_update_auction,
    bench_list_auctions
);
criterion_main!(benches);
