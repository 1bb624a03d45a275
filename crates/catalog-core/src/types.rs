//! # Domain Types
//!
//! The catalog has exactly one entity: [`Product`].
//!
//! ## Product Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Lifecycle                               │
//! │                                                                         │
//! │   Product::new(..)          id = None                                  │
//! │        │                                                                │
//! │        ▼  save()                                                        │
//! │   persisted                 id = Some(n)  (assigned by the store)      │
//! │        │                                                                │
//! │        ▼  update(id, patch)                                             │
//! │   overwritten               id unchanged, six fields replaced          │
//! │        │                                                                │
//! │        ▼  delete(id)                                                    │
//! │   gone                      hard delete, nothing left behind           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Numeric product identifier assigned by the store on first save.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product listed in the catalog.
///
/// `price` is stored as integer minor units and travels as a decimal string. `created_at` and `updated_at`
/// are owned by the store: whatever a caller puts there is ignored on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier; `None` until the first save.
    pub id: Option<ProductId>,

    /// Display name; the field searched by keyword.
    pub name: String,

    pub description: Option<String>,

    #[ts(as = "String")]
    pub price: Money,

    /// Units on hand.
    pub stock: u32,

    /// Free-form category label, matched exactly.
    pub category: Option<String>,

    /// Image reference (usually a URL).
    pub image_url: Option<String>,

    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,

    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Creates an unsaved product with the given name and price.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::{Money, Product};
    ///
    /// let product = Product::new("Widget A", Money::from_cents(999))
    ///     .with_category("tools")
    ///     .with_stock(3);
    /// assert_eq!(product.id, None);
    /// ```
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Product {
            name: name.into(),
            price,
            ..Product::default()
        }
    }

    /// Sets the identifier (for upserts and test fixtures).
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Whether the store has assigned an identifier yet.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Replaces every mutable field with the value from `patch`.
    ///
    /// ## Full Replace
    /// ```text
    /// stored:  { id: 7, name: "Old", description: Some("d"), stock: 4, ... }
    /// patch:   { id: 99, name: "New", description: None,     stock: 0, ... }
    ///                 │
    ///                 ▼
    /// result:  { id: 7, name: "New", description: None,     stock: 0, ... }
    /// ```
    /// Empty and default values in the patch are copied like any other.
    /// `id` and the timestamps are left untouched.
    pub fn overwrite_from(&mut self, patch: &Product) {
        self.name = patch.name.clone();
        self.description = patch.description.clone();
        self.price = patch.price;
        self.stock = patch.stock;
        self.category = patch.category.clone();
        self.image_url = patch.image_url.clone();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
