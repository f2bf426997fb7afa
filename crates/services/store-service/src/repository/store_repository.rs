//! Store repository implementation.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IsolationLevel, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::store::{self, Entity as StoreEntity};
use super::entities::store_user;
use crate::infra::db;
use common::{AppError, AppResult};
use domain::{NewStore, Store, StoreUser};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Store repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Create a store and link it to its creator.
    ///
    /// Both records are written in a single transaction: if the link cannot
    /// be created the store is rolled back.
    async fn create_with_owner(
        &self,
        new_store: NewStore,
        user_id: String,
    ) -> AppResult<(Store, StoreUser)>;

    /// Find a store the user is a member of
    async fn find_for_user(&self, store_id: Uuid, user_id: &str) -> AppResult<Option<Store>>;

    /// List all stores the user is a member of, oldest first
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Store>>;

    /// Check connectivity to the backing database
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM-backed implementation of StoreRepository
pub struct SeaOrmStoreRepository {
    db: DatabaseConnection,
}

impl SeaOrmStoreRepository {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Release the underlying connection
    pub fn into_inner(self) -> DatabaseConnection {
        self.db
    }
}

/// Insert a store row.
async fn insert_store<C: ConnectionTrait>(conn: &C, new_store: NewStore) -> AppResult<Store> {
    let now = chrono::Utc::now();
    let active_model = store::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(new_store.into_name()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let model = active_model.insert(conn).await.map_err(AppError::from)?;
    Ok(Store::from(model))
}

/// Insert a membership row for an existing store.
async fn insert_store_user<C: ConnectionTrait>(
    conn: &C,
    store_id: Uuid,
    user_id: String,
) -> AppResult<StoreUser> {
    let active_model = store_user::ActiveModel {
        id: Set(Uuid::new_v4()),
        store_id: Set(store_id),
        user_id: Set(user_id),
        created_at: Set(chrono::Utc::now()),
    };

    let model = active_model.insert(conn).await.map_err(AppError::from)?;
    Ok(StoreUser::from(model))
}

#[async_trait]
impl StoreRepository for SeaOrmStoreRepository {
    async fn create_with_owner(
        &self,
        new_store: NewStore,
        user_id: String,
    ) -> AppResult<(Store, StoreUser)> {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let result = async {
            let store = insert_store(&txn, new_store).await?;
            let link = insert_store_user(&txn, store.id, user_id).await?;
            Ok::<_, AppError>((store, link))
        }
        .await;

        match result {
            Ok(created) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(created)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    async fn find_for_user(&self, store_id: Uuid, user_id: &str) -> AppResult<Option<Store>> {
        let result = StoreEntity::find_by_id(store_id)
            .inner_join(store_user::Entity)
            .filter(store_user::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Store::from))
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Store>> {
        let models = StoreEntity::find()
            .inner_join(store_user::Entity)
            .filter(store_user::Column::UserId.eq(user_id))
            .order_by_asc(store::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Store::from).collect())
    }

    async fn ping(&self) -> AppResult<()> {
        db::ping(&self.db).await.map_err(AppError::from)
    }
}
