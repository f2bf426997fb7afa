//! Store service - Handles store-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{NewStore, Store};

use crate::repository::StoreRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Store service trait for dependency injection.
///
/// Every operation is scoped to the calling user's identity as resolved by
/// the auth provider.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StoreService: Send + Sync {
    /// Create a store owned by the given user
    async fn create_store(&self, user_id: &str, new_store: NewStore) -> AppResult<Store>;

    /// List the stores the user belongs to
    async fn list_stores(&self, user_id: &str) -> AppResult<Vec<Store>>;

    /// Get one of the user's stores
    async fn get_store(&self, user_id: &str, store_id: Uuid) -> AppResult<Store>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Concrete implementation of StoreService using repository.
pub struct StoreManager {
    repo: Arc<dyn StoreRepository>,
}

impl StoreManager {
    /// Create new store service instance with repository
    pub fn new(repo: Arc<dyn StoreRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl StoreService for StoreManager {
    async fn create_store(&self, user_id: &str, new_store: NewStore) -> AppResult<Store> {
        let (store, link) = self
            .repo
            .create_with_owner(new_store, user_id.to_string())
            .await?;

        tracing::info!(store_id = %store.id, user_id = %link.user_id, "Store created");
        Ok(store)
    }

    async fn list_stores(&self, user_id: &str) -> AppResult<Vec<Store>> {
        self.repo.list_for_user(user_id).await
    }

    async fn get_store(&self, user_id: &str, store_id: Uuid) -> AppResult<Store> {
        self.repo
            .find_for_user(store_id, user_id)
            .await?
            .ok_or_not_found()
    }

    async fn ping(&self) -> AppResult<()> {
        self.repo.ping().await
    }
}
