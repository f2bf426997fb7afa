//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Stores
// =============================================================================

/// Message returned when a store is submitted without a usable name
pub const NAME_REQUIRED_MESSAGE: &str = "Name is required";

// =============================================================================
// Authentication
// =============================================================================

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Default name of the cookie carrying the session token
pub const DEFAULT_SESSION_COOKIE: &str = "__session";
