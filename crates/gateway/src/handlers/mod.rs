//! HTTP request handlers.

pub mod health_handler;
pub mod store_handler;

pub use health_handler::health_routes;
pub use store_handler::store_routes;
