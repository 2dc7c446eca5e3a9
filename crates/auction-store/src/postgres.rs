use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{Auction, AuctionId, Item, ItemId, Status};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{AuctionRepository, Result, StoreError};

const SELECT_AUCTIONS: &str = r#"
    SELECT a.id, a.reserve_price, a.seller, a.winner, a.sold_amount, a.current_high_bid,
           a.created_at, a.updated_at, a.auction_end, a.status,
           i.id AS item_id, i.make, i.model, i.year, i.color, i.mileage, i.image_url
    FROM auctions a
    JOIN items i ON i.auction_id = a.id
"#;

/// PostgreSQL-backed auction store.
#[derive(Clone)]
pub struct PostgresAuctionStore {
    pool: PgPool,
}

impl PostgresAuctionStore {
    /// Creates a new PostgreSQL auction store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        tracing::info!("auction store migrations applied");
        Ok(())
    }

    fn row_to_auction(row: PgRow) -> Result<Auction> {
        let status: String = row.try_get("status")?;

        Ok(Auction {
            id: AuctionId::from_uuid(row.try_get::<Uuid, _>("id")?),
            reserve_price: row.try_get("reserve_price")?,
            seller: row.try_get("seller")?,
            winner: row.try_get("winner")?,
            sold_amount: row.try_get("sold_amount")?,
            current_high_bid: row.try_get("current_high_bid")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            auction_end: row.try_get("auction_end")?,
            status: status.parse::<Status>()?,
            item: Item {
                id: ItemId::from_uuid(row.try_get::<Uuid, _>("item_id")?),
                make: row.try_get("make")?,
                model: row.try_get("model")?,
                year: row.try_get("year")?,
                color: row.try_get("color")?,
                mileage: row.try_get("mileage")?,
                image_url: row.try_get("image_url")?,
            },
        })
    }
}

#[async_trait]
impl AuctionRepository for PostgresAuctionStore {
    async fn list_auctions(&self) -> Result<Vec<Auction>> {
        // Byte-wise collation, matching how Rust compares strings.
        let sql = format!(r#"{SELECT_AUCTIONS} ORDER BY i.make COLLATE "C" ASC"#);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.into_iter().map(Self::row_to_auction).collect()
    }

    async fn get_auction(&self, id: AuctionId) -> Result<Option<Auction>> {
        let sql = format!("{SELECT_AUCTIONS} WHERE a.id = $1");
        let row: Option<PgRow> = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_auction).transpose()
    }

    async fn auction_exists(&self, id: AuctionId) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM auctions WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn count_auctions(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM auctions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    async fn insert_auction(&self, auction: &Auction) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let auction_rows = sqlx::query(
            r#"
            INSERT INTO auctions (id, reserve_price, seller, winner, sold_amount, current_high_bid,
                                  created_at, updated_at, auction_end, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(auction.id.as_uuid())
        .bind(auction.reserve_price)
        .bind(&auction.seller)
        .bind(&auction.winner)
        .bind(auction.sold_amount)
        .bind(auction.current_high_bid)
        .bind(auction.created_at)
        .bind(auction.updated_at)
        .bind(auction.auction_end)
        .bind(auction.status.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.constraint() == Some("auctions_pkey")
            {
                return StoreError::DuplicateAuction(auction.id);
            }
            StoreError::Database(e)
        })?
        .rows_affected();

        let item = &auction.item;
        let item_rows = sqlx::query(
            r#"
            INSERT INTO items (id, auction_id, make, model, year, color, mileage, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(item.id.as_uuid())
        .bind(auction.id.as_uuid())
        .bind(&item.make)
        .bind(&item.model)
        .bind(item.year)
        .bind(&item.color)
        .bind(item.mileage)
        .bind(&item.image_url)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;
        Ok(auction_rows + item_rows)
    }

    async fn update_item(
        &self,
        auction_id: AuctionId,
        item: &Item,
        updated_at: DateTime<Utc>,
    ) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        // The row comparison skips the write entirely when nothing differs.
        let item_rows = sqlx::query(
            r#"
            UPDATE items
            SET make = $2, model = $3, year = $4, color = $5, mileage = $6, image_url = $7
            WHERE auction_id = $1
              AND (make, model, year, color, mileage, image_url)
                  IS DISTINCT FROM ($2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(auction_id.as_uuid())
        .bind(&item.make)
        .bind(&item.model)
        .bind(item.year)
        .bind(&item.color)
        .bind(item.mileage)
        .bind(&item.image_url)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if item_rows == 0 {
            tx.rollback().await?;
            return Ok(0);
        }

        let auction_rows = sqlx::query("UPDATE auctions SET updated_at = $2 WHERE id = $1")
            .bind(auction_id.as_uuid())
            .bind(updated_at)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(item_rows + auction_rows)
    }

    async fn delete_auction(&self, id: AuctionId) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let item_rows = sqlx::query("DELETE FROM items WHERE auction_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let auction_rows = sqlx::query("DELETE FROM auctions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(item_rows + auction_rows)
    }
}
