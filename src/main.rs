//! Compare API Server
//!
//! Compares 2-3 products from the product catalog service and names the
//! cheapest option. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::HttpCatalogClient;
use app::ComparisonService;
use config::Config;
use domain::ports::ProductCatalog;

/// Application state shared across all handlers
pub struct AppState<C>
where
    C: ProductCatalog,
{
    pub comparison_service: Arc<ComparisonService<C>>,
}

impl<C> Clone for AppState<C>
where
    C: ProductCatalog,
{
    fn clone(&self) -> Self {
        Self {
            comparison_service: Arc::clone(&self.comparison_service),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router over any catalog implementation
pub fn build_router<C>(state: AppState<C>) -> Router
where
    C: ProductCatalog + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/compare", post(handlers::compare_products::<C>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,compare_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting compare API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("product catalog address: {}", config.catalog_addr);

    // Create adapters and services
    let catalog = Arc::new(HttpCatalogClient::new(config.catalog_addr.clone()));
    let comparison_service = Arc::new(ComparisonService::new(catalog));

    let state = AppState { comparison_service };
    let app = build_router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
