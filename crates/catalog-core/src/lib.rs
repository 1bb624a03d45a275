//! # catalog-core: Pure Types for the Product Catalog
//!
//! This crate holds the catalog's domain types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Boundary layer (HTTP, CLI, ...) - external           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 catalog-service (ProductService)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               catalog-db (ProductRepository, SQLite)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ★ catalog-core (THIS CRATE) ★ is shared by every layer above:        │
//! │     Product  •  Money  •  CoreError                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Product` entity and its identifier
//! - [`money`] - Money type with integer minor units (no floating point!)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Money, Product};
//!
//! let price: Money = "99.99".parse().unwrap();
//! let product = Product::new("Widget A", price).with_stock(10);
//!
//! assert!(!product.is_persisted());
//! assert_eq!(product.price.cents(), 9999);
//! ```

pub mod error;
pub mod money;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::{Product, ProductId};
