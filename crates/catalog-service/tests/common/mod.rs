//! Shared fixtures for the service tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use catalog_core::{Money, Product, ProductId};
use catalog_db::{DbError, DbResult, ProductRepository};

/// One recorded repository call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FindAll,
    FindById(ProductId),
    Save(Product),
    DeleteById(ProductId),
    FindByCategory(String),
    FindByNameContaining(String),
}

#[derive(Default)]
struct State {
    products: Vec<Product>,
    next_id: ProductId,
    calls: Vec<Call>,
    fail_with: Option<fn() -> DbError>,
}

/// In-memory repository that records every call it receives.
///
/// Keeps products in insertion order and hands out ids starting at 1, so it
/// behaves like the SQLite repository for the service's purposes.
#[derive(Default)]
pub struct RecordingRepository {
    state: Mutex<State>,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store without recording calls.
    pub fn with_products(products: Vec<Product>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.lock().unwrap();
            state.next_id = products.iter().filter_map(|p| p.id).max().unwrap_or(0);
            state.products = products;
        }
        repo
    }

    /// Makes every subsequent call fail with the produced error.
    pub fn failing(self, make_error: fn() -> DbError) -> Self {
        self.state.lock().unwrap().fail_with = Some(make_error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn save_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Save(_)))
            .count()
    }

    pub fn stored(&self) -> Vec<Product> {
        self.state.lock().unwrap().products.clone()
    }

    fn record(&self, call: Call) -> DbResult<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        let fail_with = state.fail_with;
        match fail_with {
            Some(make_error) => Err(make_error()),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl ProductRepository for RecordingRepository {
    async fn find_all(&self) -> DbResult<Vec<Product>> {
        let state = self.record(Call::FindAll)?;
        Ok(state.products.clone())
    }

    async fn find_by_id(&self, id: ProductId) -> DbResult<Option<Product>> {
        let state = self.record(Call::FindById(id))?;
        Ok(state.products.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn save(&self, product: &Product) -> DbResult<Product> {
        let mut state = self.record(Call::Save(product.clone()))?;
        let mut saved = product.clone();

        match saved.id {
            Some(id) => {
                state.next_id = state.next_id.max(id);
                match state.products.iter_mut().find(|p| p.id == Some(id)) {
                    Some(existing) => *existing = saved.clone(),
                    None => state.products.push(saved.clone()),
                }
            }
            None => {
                state.next_id += 1;
                saved.id = Some(state.next_id);
                state.products.push(saved.clone());
            }
        }

        Ok(saved)
    }

    async fn delete_by_id(&self, id: ProductId) -> DbResult<()> {
        let mut state = self.record(Call::DeleteById(id))?;
        state.products.retain(|p| p.id != Some(id));
        Ok(())
    }

    async fn find_by_category(&self, category: &str) -> DbResult<Vec<Product>> {
        let state = self.record(Call::FindByCategory(category.to_string()))?;
        Ok(state
            .products
            .iter()
            .filter(|p| p.category.as_deref() == Some(category))
            .cloned()
            .collect())
    }

    async fn find_by_name_containing(&self, substring: &str) -> DbResult<Vec<Product>> {
        let state = self.record(Call::FindByNameContaining(substring.to_string()))?;
        let needle = substring.to_ascii_lowercase();
        Ok(state
            .products
            .iter()
            .filter(|p| p.name.to_ascii_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

pub fn product(id: ProductId, name: &str, cents: i64, stock: u32) -> Product {
    Product::new(name, Money::from_cents(cents))
        .with_id(id)
        .with_stock(stock)
}

/// The two fixtures most tests start from.
pub fn two_products() -> Vec<Product> {
    vec![
        product(1, "测试商品1", 9999, 10),
        product(2, "测试商品2", 19999, 20),
    ]
}
