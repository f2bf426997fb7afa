//! Repository layer for data access.

pub mod entities;
mod store_repository;

pub use store_repository::{StoreRepository, SeaOrmStoreRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use store_repository::MockStoreRepository;
