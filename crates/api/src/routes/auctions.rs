//! Auction resource endpoints.

use std::sync::Arc;

use auction_store::AuctionRepository;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use common::AuctionId;
use domain::AuctionService;

use crate::dto::{AuctionView, CreateAuctionRequest, UpdateAuctionRequest};
use crate::error::ApiError;
use crate::identity::SellerResolver;

/// Shared application state accessible from all handlers.
pub struct AppState<R: AuctionRepository> {
    pub auction_service: AuctionService<R>,
    pub seller_resolver: Arc<dyn SellerResolver>,
}

/// GET /auctions: every auction, ordered by item make.
#[tracing::instrument(skip(state))]
pub async fn list<R: AuctionRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<AuctionView>>, ApiError> {
    let auctions = state.auction_service.list_auctions().await?;

    Ok(Json(auctions.into_iter().map(AuctionView::from).collect()))
}

/// GET /auctions/{id}: a single auction.
#[tracing::instrument(skip(state))]
pub async fn get<R: AuctionRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<AuctionView>, ApiError> {
    let auction_id = parse_auction_id(&id)?;
    let auction = state.auction_service.get_auction(auction_id).await?;

    Ok(Json(AuctionView::from(auction)))
}

/// POST /auctions: open a new auction for the requesting seller.
///
/// Responds 201 with the created auction and a `Location` pointing at it.
#[tracing::instrument(skip(state, headers, body))]
pub async fn create<R: AuctionRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    headers: HeaderMap,
    body: Result<Json<CreateAuctionRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<AuctionView>), ApiError> {
    let Json(req) = body?;
    let seller = state
        .seller_resolver
        .resolve(&headers)
        .ok_or_else(|| ApiError::Unauthorized("Seller identity is required".to_string()))?;

    let auction = state
        .auction_service
        .create_auction(&seller, req.into())
        .await?;

    let location = format!("/auctions/{}", auction.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AuctionView::from(auction)),
    ))
}

/// PUT /auctions/{id}: partial update of the auction's item.
#[tracing::instrument(skip(state, body))]
pub async fn update<R: AuctionRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateAuctionRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let auction_id = parse_auction_id(&id)?;
    let Json(req) = body?;
    state
        .auction_service
        .update_auction(auction_id, req.into())
        .await?;

    Ok(StatusCode::OK)
}

/// DELETE /auctions/{id}: remove the auction and its item.
#[tracing::instrument(skip(state))]
pub async fn delete<R: AuctionRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let auction_id = parse_auction_id(&id)?;
    state.auction_service.delete_auction(auction_id).await?;

    Ok(StatusCode::OK)
}

fn parse_auction_id(id: &str) -> Result<AuctionId, ApiError> {
    id.parse::<AuctionId>()
        .map_err(|e| ApiError::BadRequest(format!("Invalid ID format: {e}")))
}
