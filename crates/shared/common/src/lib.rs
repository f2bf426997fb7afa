//! Common utilities shared across the store workspace.
//!
//! This crate provides:
//! - Unified error handling with plain-text HTTP responses
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
