//! Service layer - store use cases.

mod store_service;

pub use store_service::{StoreManager, StoreService};

#[cfg(any(test, feature = "test-utils"))]
pub use store_service::MockStoreService;
