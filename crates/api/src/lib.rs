//! HTTP API server with observability for the auction service.
//!
//! Provides REST endpoints for the auction resource, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod dto;
pub mod error;
pub mod identity;
pub mod routes;

use std::sync::Arc;

use auction_store::AuctionRepository;
use axum::Router;
use axum::routing::get;
use domain::AuctionService;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use identity::SellerResolver;
use routes::auctions::{self, AppState};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: AuctionRepository + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<R>))
        .route(
            "/auctions",
            get(auctions::list::<R>).post(auctions::create::<R>),
        )
        .route(
            "/auctions/{id}",
            get(auctions::get::<R>)
                .put(auctions::update::<R>)
                .delete(auctions::delete::<R>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around a repository and seller resolver.
pub fn create_state<R: AuctionRepository + 'static>(
    repository: R,
    seller_resolver: Arc<dyn SellerResolver>,
) -> Arc<AppState<R>> {
    Arc::new(AppState {
        auction_service: AuctionService::new(repository),
        seller_resolver,
    })
}
