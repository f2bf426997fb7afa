//! Store API Gateway Library
//!
//! This crate provides the HTTP REST API for creating and reading stores.
//! Persistence lives in the store service crate, which is embedded directly.

pub mod auth;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use store_service_lib::infra::Database;
use store_service_lib::repository::SeaOrmStoreRepository;
use store_service_lib::service::StoreManager;

use crate::auth::JwtAuthProvider;
use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
///
/// Connects to the database (applying pending migrations) before binding.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    // Create repository and service
    let store_repo = Arc::new(SeaOrmStoreRepository::new(db.into_connection()));
    let store_service = Arc::new(StoreManager::new(store_repo));

    // Create auth provider
    let auth_provider = Arc::new(JwtAuthProvider::from_config(&config.auth)?);

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    // Create app state and router
    let state = AppState::new(auth_provider, store_service, config);
    let app = create_router(state);

    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
