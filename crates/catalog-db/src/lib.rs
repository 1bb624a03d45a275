//! # catalog-db: Database Layer for the Catalog
//!
//! This crate provides database access for the product catalog.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Data Flow                                │
//! │                                                                         │
//! │  ProductService::search_products("widget")                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     catalog-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌─────────────┐ │   │
//! │  │   │   Database    │    │   Repositories     │  │ Migrations  │ │   │
//! │  │   │   (pool.rs)   │    │   (product.rs)     │  │ (embedded)  │ │   │
//! │  │   │               │    │                    │  │             │ │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepository  │  │ 001_create_ │ │   │
//! │  │   │               │    │ SqliteProductRepo  │  │ products    │ │   │
//! │  │   └───────────────┘    └────────────────────┘  └─────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (file or :memory:)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{Database, DbConfig, ProductRepository};
//!
//! let db = Database::new(DbConfig::new("path/to/catalog.db")).await?;
//! let tools = db.products().find_by_category("tools").await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::SqliteProductRepository;
pub use repository::ProductRepository;
