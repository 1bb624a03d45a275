//! # Product Repository
//!
//! SQLite implementation of [`ProductRepository`].
//!
//! ## Save Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         save(product)                                   │
//! │                                                                         │
//! │   product.id?                                                           │
//! │     │                                                                   │
//! │     ├── None ────► INSERT ... RETURNING *        (new id assigned)     │
//! │     │                                                                   │
//! │     └── Some(n) ─► INSERT (id = n) ...                                 │
//! │                    ON CONFLICT(id) DO UPDATE    (row replaced,         │
//! │                    RETURNING *                   created_at kept)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name Search
//! `instr(lower(name), lower(?))` rather than `LIKE`: the keyword is taken
//! literally, so `%` and `_` in user input are not wildcards. SQLite's
//! `lower()` only folds ASCII letters.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use catalog_core::{Product, ProductId};

use crate::error::DbResult;
use crate::repository::ProductRepository;

const PRODUCT_COLUMNS: &str =
    "id, name, description, price, stock, category, image_url, created_at, updated_at";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SqliteProductRepository::new(pool);
///
/// let saved = repo.save(&Product::new("Widget A", price)).await?;
/// let found = repo.find_by_id(saved.id.unwrap()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Creates a new SqliteProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteProductRepository { pool }
    }

    /// Counts stored products (for diagnostics and the seed tool).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert(&self, product: &Product) -> DbResult<Product> {
        let now = Utc::now();
        let sql = format!(
            r#"
            INSERT INTO products (
                name, description, price, stock, category, image_url,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let saved = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock)
            .bind(&product.category)
            .bind(&product.image_url)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        debug!(id = ?saved.id, "Inserted product");
        Ok(saved)
    }

    async fn upsert(&self, id: ProductId, product: &Product) -> DbResult<Product> {
        let now = Utc::now();
        let sql = format!(
            r#"
            INSERT INTO products (
                id, name, description, price, stock, category, image_url,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                price = excluded.price,
                stock = excluded.stock,
                category = excluded.category,
                image_url = excluded.image_url,
                updated_at = excluded.updated_at
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let saved = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock)
            .bind(&product.category)
            .bind(&product.image_url)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        debug!(id = %id, "Upserted product");
        Ok(saved)
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_all(&self) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");

        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    async fn find_by_id(&self, id: ProductId) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        debug!(id = %id, found = product.is_some(), "Looked up product");
        Ok(product)
    }

    async fn save(&self, product: &Product) -> DbResult<Product> {
        match product.id {
            Some(id) => self.upsert(id, product).await,
            None => self.insert(product).await,
        }
    }

    async fn delete_by_id(&self, id: ProductId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id = %id, deleted = result.rows_affected(), "Deleted product");
        Ok(())
    }

    async fn find_by_category(&self, category: &str) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE category = ?1 ORDER BY id");

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;

        debug!(category = %category, count = products.len(), "Listed products by category");
        Ok(products)
    }

    async fn find_by_name_containing(&self, substring: &str) -> DbResult<Vec<Product>> {
        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE ?1 = '' OR instr(lower(name), lower(?1)) > 0
            ORDER BY id
            "#
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(substring)
            .fetch_all(&self.pool)
            .await?;

        debug!(query = %substring, count = products.len(), "Searched products by name");
        Ok(products)
    }
}
