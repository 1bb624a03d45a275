//! # Service Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ServiceError                                                           │
//! │  ├── NotFound { id }   ← update on a missing id (the only domain error)│
//! │  └── Storage(DbError)  ← anything the repository reports, unchanged    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retries and no fallback: the caller sees exactly what went wrong.

use catalog_core::ProductId;
use catalog_db::DbError;
use thiserror::Error;

/// Errors returned by [`ProductService`](crate::ProductService).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Update targeted an id with no stored product.
    #[error("Product not found: {id}")]
    NotFound { id: ProductId },

    /// Failure reported by the persistence layer, passed through as-is.
    #[error(transparent)]
    Storage(#[from] DbError),
}

impl ServiceError {
    /// Whether this is the not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }

    /// The missing id, for the not-found case.
    pub fn not_found_id(&self) -> Option<ProductId> {
        match self {
            ServiceError::NotFound { id } => Some(*id),
            ServiceError::Storage(_) => None,
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
