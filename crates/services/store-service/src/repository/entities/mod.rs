//! SeaORM entities.

pub mod store;
pub mod store_user;
