//! # Product Service
//!
//! Catalog operations exposed to callers.
//!
//! ## Delegation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductService              ProductRepository                          │
//! │  ──────────────              ─────────────────                          │
//! │  get_all_products()     ───► find_all()                                │
//! │  get_product_by_id(id)  ───► find_by_id(id)                            │
//! │  create_product(p)      ───► save(p)                                   │
//! │  update_product(id, p)  ───► find_by_id(id) → overwrite → save(merged) │
//! │  delete_product(id)     ───► delete_by_id(id)                          │
//! │  get_products_by_category(c) ► find_by_category(c)                     │
//! │  search_products(kw)    ───► find_by_name_containing(kw)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `update_product` adds logic; everything else is a straight forward.

use tracing::{debug, warn};

use catalog_core::{Product, ProductId};
use catalog_db::ProductRepository;

use crate::error::{ServiceError, ServiceResult};

/// Stateless facade over a [`ProductRepository`].
///
/// The repository is handed in at construction; there is no global registry.
///
/// ## Usage
/// ```rust,ignore
/// let service = ProductService::new(db.products());
/// let created = service.create_product(&Product::new("Widget A", price)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        ProductService { repo }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Lists every product.
    pub async fn get_all_products(&self) -> ServiceResult<Vec<Product>> {
        debug!("get_all_products");
        Ok(self.repo.find_all().await?)
    }

    /// Looks up a product; a missing id is `Ok(None)`.
    pub async fn get_product_by_id(&self, id: ProductId) -> ServiceResult<Option<Product>> {
        debug!(id = %id, "get_product_by_id");
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Persists a new product and returns it with its assigned id.
    ///
    /// No field is validated. An `id` set by the caller is passed through,
    /// so the store treats it as an upsert onto that id.
    pub async fn create_product(&self, product: &Product) -> ServiceResult<Product> {
        debug!(name = %product.name, id = ?product.id, "create_product");
        Ok(self.repo.save(product).await?)
    }

    /// Overwrites the product stored under `id` with the fields of `patch`.
    ///
    /// ## Steps
    /// 1. Load the stored product.
    /// 2. Missing → [`ServiceError::NotFound`]; nothing is written.
    /// 3. Copy name, description, price, stock, category and image URL from
    ///    `patch`, empty values included. `patch.id` is ignored.
    /// 4. Save and return the merged product.
    pub async fn update_product(&self, id: ProductId, patch: &Product) -> ServiceResult<Product> {
        debug!(id = %id, "update_product");

        let Some(mut product) = self.repo.find_by_id(id).await? else {
            warn!(id = %id, "update_product: product does not exist");
            return Err(ServiceError::NotFound { id });
        };

        product.overwrite_from(patch);

        Ok(self.repo.save(&product).await?)
    }

    /// Deletes a product. Deleting a missing id is not an error.
    pub async fn delete_product(&self, id: ProductId) -> ServiceResult<()> {
        debug!(id = %id, "delete_product");
        Ok(self.repo.delete_by_id(id).await?)
    }

    /// Products in exactly this category.
    pub async fn get_products_by_category(&self, category: &str) -> ServiceResult<Vec<Product>> {
        debug!(category = %category, "get_products_by_category");
        Ok(self.repo.find_by_category(category).await?)
    }

    /// Products whose name contains `keyword` (ASCII case-insensitive).
    pub async fn search_products(&self, keyword: &str) -> ServiceResult<Vec<Product>> {
        debug!(keyword = %keyword, "search_products");
        Ok(self.repo.find_by_name_containing(keyword).await?)
    }
}
