//! # catalog-service: Product Service Layer
//!
//! The contract surface a boundary layer (HTTP handlers, CLI, ...) consumes.
//!
//! ## Module Organization
//! ```text
//! catalog_service/
//! ├── lib.rs              ◄─── You are here
//! ├── product_service.rs  ◄─── ProductService (delegation + update merge)
//! ├── error.rs            ◄─── ServiceError (NotFound, Storage)
//! ├── config.rs           ◄─── Environment configuration
//! └── telemetry.rs        ◄─── tracing-subscriber setup
//! ```
//!
//! ## Wiring
//! ```rust,ignore
//! use catalog_db::Database;
//! use catalog_service::{CatalogConfig, ProductService};
//!
//! let config = CatalogConfig::load()?;
//! let db = Database::new(config.db_config()).await?;
//! let service = ProductService::new(db.products());
//!
//! let tools = service.get_products_by_category("tools").await?;
//! ```

pub mod config;
pub mod error;
pub mod product_service;
pub mod telemetry;

pub use config::{CatalogConfig, ConfigError};
pub use error::{ServiceError, ServiceResult};
pub use product_service::ProductService;
