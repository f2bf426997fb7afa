//! Application state for dependency injection.

use std::sync::Arc;

use store_service_lib::service::StoreService;

use crate::auth::AuthProvider;
use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_provider: Arc<dyn AuthProvider>,
    pub store_service: Arc<dyn StoreService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_provider: Arc<dyn AuthProvider>,
        store_service: Arc<dyn StoreService>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            auth_provider,
            store_service,
            config,
        }
    }
}
