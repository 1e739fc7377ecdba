//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (agri-core)      missing id in collection             │
//! │       │                                  │                              │
//! │       ▼                                  ▼                              │
//! │  StoreError (this module) ← Adds entity and id context                 │
//! │       │                                                                 │
//! │       ├──► Mutation helper (agri-client) ← Returned to caller as is    │
//! │       │                                                                 │
//! │       └──► FetchState.error ← Only the message survives               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use agri_core::ValidationError;
use thiserror::Error;

/// Store operation errors.
///
/// Lookups never produce an error: `get_by_id` returns `None` for a missing
/// id. Only writes that target a record can fail with `NotFound`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Target record does not exist.
    ///
    /// ## When This Occurs
    /// - `update` on an id that was never created or was deleted
    /// - `delete` on a missing farmer
    /// - `dismiss` on a missing alert
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The draft or the merged record breaks a business rule.
    ///
    /// The collection is left untouched.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Any other rejected operation.
    ///
    /// ## When This Occurs
    /// - The id generator keeps producing ids that are already taken
    #[error("Store operation failed: {0}")]
    Failure(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Returns true for a missing-record error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
