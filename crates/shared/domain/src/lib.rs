//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The store service and the HTTP gateway both build on these types.

pub mod constants;
pub mod error;
pub mod store;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use store::{NewStore, Store, StoreUser};
