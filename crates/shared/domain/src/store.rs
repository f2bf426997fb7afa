//! Store domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::NAME_REQUIRED_MESSAGE;
use crate::error::{DomainError, DomainResult};

/// Store domain entity.
///
/// Serialized with camelCase keys, which is the shape returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique store identifier
    #[cfg_attr(feature = "openapi", schema(example = "550e8400-e29b-41d4-a716-446655440000"))]
    pub id: Uuid,
    /// Store display name
    #[cfg_attr(feature = "openapi", schema(example = "My Store"))]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Membership of a user in a store.
///
/// The creator of a store is linked to it in the same transaction that
/// creates the store, so every store has at least one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreUser {
    pub id: Uuid,
    pub store_id: Uuid,
    /// Opaque identifier issued by the auth provider
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStore {
    name: String,
}

impl NewStore {
    /// Create a new store input. The name must not be empty.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation(NAME_REQUIRED_MESSAGE));
        }
        Ok(Self { name })
    }

    /// Store name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume and return the store name
    pub fn into_name(self) -> String {
        self.name
    }
}
