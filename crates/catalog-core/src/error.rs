//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  └── CoreError        - Domain errors (bad price input)                │
//! │                                                                         │
//! │  catalog-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  catalog-service errors                                                │
//! │  └── ServiceError     - NotFound on update, opaque storage failures    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A price string could not be parsed into [`Money`](crate::Money).
    ///
    /// ## When This Occurs
    /// - Non-numeric input (`"abc"`)
    /// - More than two fractional digits (`"1.999"`)
    /// - Value does not fit in 64-bit minor units
    #[error("Invalid price '{input}': {reason}")]
    InvalidPrice { input: String, reason: String },
}

impl CoreError {
    /// Creates an InvalidPrice error.
    pub fn invalid_price(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidPrice {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
