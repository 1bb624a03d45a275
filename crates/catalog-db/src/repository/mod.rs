//! # Repository Module
//!
//! Data-access contracts for the catalog and their SQLite implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  ProductService<R: ProductRepository>                                  │
//! │       │                                                                 │
//! │       │  repo.find_by_category("tools")                                │
//! │       ▼                                                                 │
//! │  ProductRepository (trait, this module)                                │
//! │  ├── find_all()                                                        │
//! │  ├── find_by_id(id)                                                    │
//! │  ├── save(product)                                                     │
//! │  ├── delete_by_id(id)                                                  │
//! │  ├── find_by_category(category)                                        │
//! │  └── find_by_name_containing(substring)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SqliteProductRepository ──► SQL ──► SQLite                            │
//! │                                                                         │
//! │  Tests swap in an in-memory fake behind the same trait.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;

use async_trait::async_trait;
use catalog_core::{Product, ProductId};

use crate::error::DbResult;

/// Persistence contract for [`Product`].
///
/// Every list-returning method yields products in ascending id order.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every stored product; empty if there are none.
    async fn find_all(&self) -> DbResult<Vec<Product>>;

    /// Looks a product up by id. A missing id is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: ProductId) -> DbResult<Option<Product>>;

    /// Persists `product` and returns the stored form.
    ///
    /// ## Contract
    /// - `id == None`: inserts and assigns a fresh id.
    /// - `id == Some(n)`: replaces the record stored under `n` entirely, or
    ///   inserts it under `n` if there is none.
    async fn save(&self, product: &Product) -> DbResult<Product>;

    /// Removes the product if present; deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: ProductId) -> DbResult<()>;

    /// Products whose category equals `category` exactly (case-sensitive).
    async fn find_by_category(&self, category: &str) -> DbResult<Vec<Product>>;

    /// Products whose name contains `substring`.
    ///
    /// Matching ignores ASCII case and treats the argument literally.
    /// An empty substring matches every product.
    async fn find_by_name_containing(&self, substring: &str) -> DbResult<Vec<Product>>;
}
